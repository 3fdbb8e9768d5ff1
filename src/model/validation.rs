//! Validation of user-entered drafts.
//!
//! Validation runs before anything touches the network or the database. Every failing field
//! is reported at once so a form can show all messages together.

use std::collections::BTreeMap;

use reqwest::Url;
use thiserror::Error;

use crate::model::{request::NewRequestDto, resource::NewResourceDto};

pub const MIN_RESOURCE_DESCRIPTION_LEN: usize = 10;
pub const MIN_REQUEST_DESCRIPTION_LEN: usize = 20;
pub const MAX_NAME_LEN: usize = 200;

/// A resource submission form
pub type ResourceDraft = NewResourceDto;

/// A resource request form
pub type RequestDraft = NewRequestDto;

/// Returned when a wire string does not name a known enum variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Field level validation failures, keyed by field name.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Validation failed for fields: {}", self.field_names())]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.insert(field.to_string(), message.into());
    }

    /// A single-field failure
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    fn field_names(&self) -> String {
        self.fields.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// The one taxonomy entry a resource is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryRef {
    Subject(i32),
    Skill(i32),
    Exam(i32),
}

impl CategoryRef {
    /// Split into `(subject_id, skill_id, exam_id)` column values.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Subject(id) => (Some(id), None, None),
            Self::Skill(id) => (None, Some(id), None),
            Self::Exam(id) => (None, None, Some(id)),
        }
    }

    /// Rebuild from stored column values, `None` unless exactly one is set.
    pub fn from_columns(
        subject_id: Option<i32>,
        skill_id: Option<i32>,
        exam_id: Option<i32>,
    ) -> Option<Self> {
        match (subject_id, skill_id, exam_id) {
            (Some(id), None, None) => Some(Self::Subject(id)),
            (None, Some(id), None) => Some(Self::Skill(id)),
            (None, None, Some(id)) => Some(Self::Exam(id)),
            _ => None,
        }
    }
}

/// A resource draft that passed validation, with trimmed fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidResource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: CategoryRef,
}

/// A request draft that passed validation, with trimmed fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidRequest {
    pub title: String,
    pub description: String,
    pub subject_id: i32,
}

impl NewResourceDto {
    /// Validate the draft.
    ///
    /// # Rules
    /// - `title` is non-empty after trimming
    /// - `description` is at least 10 characters after trimming
    /// - `url` is an absolute `http` or `https` URL
    /// - exactly one of `subject_id`, `skill_id`, `exam_id` is set
    ///
    /// # Returns
    /// - `Ok(ValidResource)` - Draft is valid
    /// - `Err(ValidationErrors)` - Every field that failed, with a message
    pub fn validate(&self) -> Result<ValidResource, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", "Title is required");
        }

        let description = self.description.trim();
        if description.chars().count() < MIN_RESOURCE_DESCRIPTION_LEN {
            errors.add(
                "description",
                format!(
                    "Description must be at least {} characters",
                    MIN_RESOURCE_DESCRIPTION_LEN
                ),
            );
        }

        let url = self.url.trim();
        if !is_web_url(url) {
            errors.add("url", "Enter a valid http or https URL");
        }

        let category = CategoryRef::from_columns(self.subject_id, self.skill_id, self.exam_id);
        if category.is_none() {
            errors.add("category", "Choose exactly one of subject, skill or exam");
        }

        match category {
            Some(category) if errors.is_empty() => Ok(ValidResource {
                title: title.to_string(),
                description: description.to_string(),
                url: url.to_string(),
                category,
            }),
            _ => Err(errors),
        }
    }
}

impl NewRequestDto {
    /// Validate the draft: title non-empty, description at least 20 characters and a
    /// subject chosen.
    pub fn validate(&self) -> Result<ValidRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", "Title is required");
        }

        let description = self.description.trim();
        if description.chars().count() < MIN_REQUEST_DESCRIPTION_LEN {
            errors.add(
                "description",
                format!(
                    "Description must be at least {} characters",
                    MIN_REQUEST_DESCRIPTION_LEN
                ),
            );
        }

        if self.subject_id.is_none() {
            errors.add("subject_id", "Choose a subject");
        }

        match self.subject_id {
            Some(subject_id) if errors.is_empty() => Ok(ValidRequest {
                title: title.to_string(),
                description: description.to_string(),
                subject_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Validate a taxonomy name, returning it trimmed.
///
/// # Arguments
/// - `field` - Field name used in the error
/// - `value` - The entered name
pub fn validate_name(field: &str, value: &str) -> Result<String, ValidationErrors> {
    let name = value.trim();

    if name.is_empty() {
        return Err(ValidationErrors::single(field, "Name is required"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationErrors::single(
            field,
            format!("Name must be at most {} characters", MAX_NAME_LEN),
        ));
    }

    Ok(name.to_string())
}

fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
