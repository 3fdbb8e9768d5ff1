//! Resource DTOs and the filters accepted by the public resource listing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The taxonomy entry a resource is filed under, with the names needed for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceCategory {
    Subject {
        subject_id: i32,
        subject_name: String,
        domain_id: i32,
        domain_name: String,
        university_id: i32,
        university_name: String,
    },
    Skill {
        skill_id: i32,
        skill_name: String,
        category_id: i32,
        category_name: String,
    },
    Exam {
        exam_id: i32,
        exam_name: String,
        category_id: i32,
        category_name: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: ResourceCategory,
    pub is_approved: bool,
    pub submitted_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A resource as entered in a submission form.
///
/// Exactly one of `subject_id`, `skill_id` and `exam_id` must be set for the payload to
/// pass validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewResourceDto {
    pub title: String,
    pub description: String,
    pub url: String,
    pub subject_id: Option<i32>,
    pub skill_id: Option<i32>,
    pub exam_id: Option<i32>,
}

/// Full replacement of a resource's editable fields by an admin
pub type UpdateResourceDto = NewResourceDto;

/// Filters for the public resource listing. All filters combine with AND.
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResourceFilter {
    /// Case-insensitive match against title and description
    pub search: Option<String>,
    pub university_id: Option<i32>,
    pub domain_id: Option<i32>,
    pub subject_id: Option<i32>,
    pub skill_id: Option<i32>,
    pub exam_id: Option<i32>,
}

impl ResourceCategory {
    pub fn university_id(&self) -> Option<i32> {
        match self {
            Self::Subject { university_id, .. } => Some(*university_id),
            _ => None,
        }
    }

    pub fn domain_id(&self) -> Option<i32> {
        match self {
            Self::Subject { domain_id, .. } => Some(*domain_id),
            _ => None,
        }
    }

    pub fn subject_id(&self) -> Option<i32> {
        match self {
            Self::Subject { subject_id, .. } => Some(*subject_id),
            _ => None,
        }
    }

    pub fn skill_id(&self) -> Option<i32> {
        match self {
            Self::Skill { skill_id, .. } => Some(*skill_id),
            _ => None,
        }
    }

    pub fn exam_id(&self) -> Option<i32> {
        match self {
            Self::Exam { exam_id, .. } => Some(*exam_id),
            _ => None,
        }
    }
}

impl ResourceFilter {
    /// Whether `resource` passes every filter that is set.
    pub fn matches(&self, resource: &ResourceDto) -> bool {
        let category = &resource.category;

        if let Some(term) = self.search.as_deref().map(str::trim) {
            if !term.is_empty() && !resource.matches_search(term) {
                return false;
            }
        }

        fn passes(wanted: Option<i32>, actual: Option<i32>) -> bool {
            wanted.is_none() || wanted == actual
        }

        passes(self.university_id, category.university_id())
            && passes(self.domain_id, category.domain_id())
            && passes(self.subject_id, category.subject_id())
            && passes(self.skill_id, category.skill_id())
            && passes(self.exam_id, category.exam_id())
    }
}

impl ResourceDto {
    /// Case-insensitive substring match of `term` against title and description.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.title.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}
