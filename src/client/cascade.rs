//! Dependent dropdowns for the submission, request and admin forms.
//!
//! [`AcademicSelector`] drives University → Domain → Subject and [`CategorySelector`] drives
//! category → skill or category → exam. Selecting a parent clears every descendant and loads
//! the direct children. Every selection change bumps a generation counter; a load that
//! finishes after the selection moved on is discarded rather than overwriting newer options.

use std::future::Future;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::{
    client::api::{ApiClient, ClientError},
    model::catalog::{DomainDto, ExamDto, SkillDto, SubjectDto},
};

/// Where the selectors load child options from.
pub trait CatalogSource: Send + Sync {
    fn domains(
        &self,
        university_id: i32,
    ) -> impl Future<Output = Result<Vec<DomainDto>, ClientError>> + Send;

    fn subjects(
        &self,
        domain_id: i32,
    ) -> impl Future<Output = Result<Vec<SubjectDto>, ClientError>> + Send;

    fn skills(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<SkillDto>, ClientError>> + Send;

    fn exams(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<ExamDto>, ClientError>> + Send;
}

impl CatalogSource for ApiClient {
    fn domains(
        &self,
        university_id: i32,
    ) -> impl Future<Output = Result<Vec<DomainDto>, ClientError>> + Send {
        ApiClient::domains(self, university_id)
    }

    fn subjects(
        &self,
        domain_id: i32,
    ) -> impl Future<Output = Result<Vec<SubjectDto>, ClientError>> + Send {
        ApiClient::subjects(self, domain_id)
    }

    fn skills(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<SkillDto>, ClientError>> + Send {
        ApiClient::skills(self, category_id)
    }

    fn exams(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<ExamDto>, ClientError>> + Send {
        ApiClient::exams(self, category_id)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{kind} ID {id} is not among the loaded options")]
    NotAnOption { kind: &'static str, id: i32 },
}

/// Options of one dependent level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LevelOptions<T> {
    /// No parent selected
    #[default]
    Unselected,
    Loading,
    /// Children of the selected parent, empty when the load failed
    Populated(Vec<T>),
}

impl<T> LevelOptions<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Current state of an [`AcademicSelector`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcademicSelection {
    pub university_id: Option<i32>,
    pub domain_id: Option<i32>,
    pub subject_id: Option<i32>,
    pub domains: LevelOptions<DomainDto>,
    pub subjects: LevelOptions<SubjectDto>,
}

impl AcademicSelection {
    pub fn is_complete(&self) -> bool {
        self.university_id.is_some() && self.domain_id.is_some() && self.subject_id.is_some()
    }
}

#[derive(Default)]
struct Tracked<T> {
    selection: T,
    generation: u64,
}

/// University → Domain → Subject selector.
pub struct AcademicSelector<S> {
    source: S,
    state: Mutex<Tracked<AcademicSelection>>,
}

impl<S: CatalogSource> AcademicSelector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(Tracked::default()),
        }
    }

    pub async fn selection(&self) -> AcademicSelection {
        self.state.lock().await.selection.clone()
    }

    pub async fn is_complete(&self) -> bool {
        self.state.lock().await.selection.is_complete()
    }

    /// Selects a university, clearing the domain and subject, then loads its domains.
    ///
    /// Selecting `None` only clears.
    pub async fn select_university(&self, university_id: Option<i32>) {
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;

            let selection = &mut state.selection;
            selection.university_id = university_id;
            selection.domain_id = None;
            selection.subject_id = None;
            selection.subjects = LevelOptions::Unselected;
            selection.domains = match university_id {
                Some(_) => LevelOptions::Loading,
                None => LevelOptions::Unselected,
            };

            state.generation
        };

        let Some(university_id) = university_id else {
            return;
        };

        let domains = self.source.domains(university_id).await.unwrap_or_else(|e| {
            tracing::error!(university_id = %university_id, "Failed to load domains: {}", e);
            Vec::new()
        });

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(university_id = %university_id, "Discarding stale domain options");
            return;
        }

        state.selection.domains = LevelOptions::Populated(domains);
    }

    /// Selects a domain from the loaded options, clearing the subject, then loads its
    /// subjects.
    pub async fn select_domain(&self, domain_id: Option<i32>) -> Result<(), SelectionError> {
        let generation = {
            let mut state = self.state.lock().await;

            if let Some(id) = domain_id {
                if !state.selection.domains.items().iter().any(|d| d.id == id) {
                    return Err(SelectionError::NotAnOption { kind: "Domain", id });
                }
            }

            state.generation += 1;

            let selection = &mut state.selection;
            selection.domain_id = domain_id;
            selection.subject_id = None;
            selection.subjects = match domain_id {
                Some(_) => LevelOptions::Loading,
                None => LevelOptions::Unselected,
            };

            state.generation
        };

        let Some(domain_id) = domain_id else {
            return Ok(());
        };

        let subjects = self.source.subjects(domain_id).await.unwrap_or_else(|e| {
            tracing::error!(domain_id = %domain_id, "Failed to load subjects: {}", e);
            Vec::new()
        });

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(domain_id = %domain_id, "Discarding stale subject options");
            return Ok(());
        }

        state.selection.subjects = LevelOptions::Populated(subjects);

        Ok(())
    }

    pub async fn select_subject(&self, subject_id: Option<i32>) -> Result<(), SelectionError> {
        let mut state = self.state.lock().await;

        if let Some(id) = subject_id {
            if !state.selection.subjects.items().iter().any(|s| s.id == id) {
                return Err(SelectionError::NotAnOption { kind: "Subject", id });
            }
        }

        state.selection.subject_id = subject_id;

        Ok(())
    }
}

/// Which two-level taxonomy a [`CategorySelector`] walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxonomyKind {
    Skill,
    Exam,
}

/// A skill or exam as shown in a dependent dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryItem {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub category_id: Option<i32>,
    pub item_id: Option<i32>,
    pub items: LevelOptions<CategoryItem>,
}

impl CategorySelection {
    pub fn is_complete(&self) -> bool {
        self.category_id.is_some() && self.item_id.is_some()
    }
}

/// Category → skill or category → exam selector.
pub struct CategorySelector<S> {
    source: S,
    kind: TaxonomyKind,
    state: Mutex<Tracked<CategorySelection>>,
}

impl<S: CatalogSource> CategorySelector<S> {
    pub fn new(source: S, kind: TaxonomyKind) -> Self {
        Self {
            source,
            kind,
            state: Mutex::new(Tracked::default()),
        }
    }

    pub async fn selection(&self) -> CategorySelection {
        self.state.lock().await.selection.clone()
    }

    pub async fn is_complete(&self) -> bool {
        self.state.lock().await.selection.is_complete()
    }

    /// Selects a category, clearing the item, then loads the category's skills or exams.
    pub async fn select_category(&self, category_id: Option<i32>) {
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;

            let selection = &mut state.selection;
            selection.category_id = category_id;
            selection.item_id = None;
            selection.items = match category_id {
                Some(_) => LevelOptions::Loading,
                None => LevelOptions::Unselected,
            };

            state.generation
        };

        let Some(category_id) = category_id else {
            return;
        };

        let items = self.load_items(category_id).await.unwrap_or_else(|e| {
            tracing::error!(
                category_id = %category_id,
                kind = ?self.kind,
                "Failed to load category items: {}",
                e
            );
            Vec::new()
        });

        let mut state = self.state.lock().await;
        if state.generation != generation {
            return;
        }

        state.selection.items = LevelOptions::Populated(items);
    }

    pub async fn select_item(&self, item_id: Option<i32>) -> Result<(), SelectionError> {
        let mut state = self.state.lock().await;

        if let Some(id) = item_id {
            if !state.selection.items.items().iter().any(|i| i.id == id) {
                let kind = match self.kind {
                    TaxonomyKind::Skill => "Skill",
                    TaxonomyKind::Exam => "Exam",
                };
                return Err(SelectionError::NotAnOption { kind, id });
            }
        }

        state.selection.item_id = item_id;

        Ok(())
    }

    async fn load_items(&self, category_id: i32) -> Result<Vec<CategoryItem>, ClientError> {
        let items = match self.kind {
            TaxonomyKind::Skill => self
                .source
                .skills(category_id)
                .await?
                .into_iter()
                .map(|s| CategoryItem { id: s.id, name: s.name })
                .collect(),
            TaxonomyKind::Exam => self
                .source
                .exams(category_id)
                .await?
                .into_iter()
                .map(|e| CategoryItem { id: e.id, name: e.name })
                .collect(),
        };

        Ok(items)
    }
}
