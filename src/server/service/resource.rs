//! Resource browsing, submission and moderation.

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        resource::{ResourceCategory, ResourceDto, ResourceFilter},
        user::UserDto,
        validation::{CategoryRef, ResourceDraft, ValidResource},
    },
    server::{
        data::{
            catalog::{
                exam::ExamRepository, skill::SkillRepository, subject::SubjectRepository,
                university::UniversityRepository,
            },
            resource::{submission::ResourceSubmissionRepository, ResourceRepository},
        },
        error::{domain::DomainError, Error},
        model::db::ResourceModel,
    },
};

/// Deletes resources together with their submission-tracking rows.
pub(crate) async fn delete_resources<C: ConnectionTrait>(
    db: &C,
    resource_ids: &[i32],
) -> Result<(), DbErr> {
    if resource_ids.is_empty() {
        return Ok(());
    }

    ResourceSubmissionRepository::new(db)
        .delete_by_resources(resource_ids)
        .await?;
    ResourceRepository::new(db).delete_many(resource_ids).await?;

    Ok(())
}

/// Service for resource operations.
pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    /// Creates a new instance of ResourceService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists approved resources matching `filter`, newest first.
    pub async fn list_public(&self, filter: &ResourceFilter) -> Result<Vec<ResourceDto>, Error> {
        let resources = ResourceRepository::new(self.db).list_approved().await?;
        let resources = self.to_dtos(resources).await?;

        Ok(resources
            .into_iter()
            .filter(|resource| filter.matches(resource))
            .collect())
    }

    /// Lists resources awaiting moderation, newest first.
    pub async fn list_pending(&self) -> Result<Vec<ResourceDto>, Error> {
        let resources = ResourceRepository::new(self.db).list_pending().await?;

        self.to_dtos(resources).await
    }

    /// Lists every resource, newest first.
    pub async fn list_all(&self) -> Result<Vec<ResourceDto>, Error> {
        let resources = ResourceRepository::new(self.db).list_all().await?;

        self.to_dtos(resources).await
    }

    /// Gets a resource regardless of approval.
    pub async fn get(&self, resource_id: i32) -> Result<ResourceDto, Error> {
        let resource = ResourceRepository::new(self.db)
            .get(resource_id)
            .await?
            .ok_or(DomainError::not_found("Resource", resource_id))?;

        self.to_dto(resource).await
    }

    /// Gets an approved resource, pending resources are reported as not found.
    pub async fn get_public(&self, resource_id: i32) -> Result<ResourceDto, Error> {
        let resource = ResourceRepository::new(self.db)
            .get(resource_id)
            .await?
            .filter(|resource| resource.is_approved)
            .ok_or(DomainError::not_found("Resource", resource_id))?;

        self.to_dto(resource).await
    }

    /// Submits a resource on behalf of a user.
    ///
    /// The resource is pending moderation unless the submitter is an admin. A
    /// submission-tracking row is written after the resource; if that write fails the
    /// failure is logged and the submission still succeeds.
    ///
    /// # Returns
    /// - `Ok(ResourceDto)` - The stored resource
    /// - `Err(DomainError::Validation)` - Draft failed validation
    /// - `Err(DomainError::InvalidCategory)` - Chosen subject, skill or exam does not exist
    pub async fn submit(&self, user: &UserDto, draft: &ResourceDraft) -> Result<ResourceDto, Error> {
        let resource = draft.validate()?;
        self.ensure_category_exists(resource.category).await?;

        let resource = ResourceRepository::new(self.db)
            .create(&resource, user.is_admin(), Some(user.id))
            .await?;

        if let Err(e) = ResourceSubmissionRepository::new(self.db)
            .create(user.id, resource.id)
            .await
        {
            tracing::warn!(
                user_id = %user.id,
                resource_id = %resource.id,
                "Failed to record resource submission: {}",
                e
            );
        }

        tracing::info!(
            user_id = %user.id,
            resource_id = %resource.id,
            approved = resource.is_approved,
            "Resource submitted"
        );

        self.to_dto(resource).await
    }

    /// Creates an already approved resource as an admin.
    pub async fn create_as_admin(
        &self,
        admin: &UserDto,
        draft: &ResourceDraft,
    ) -> Result<ResourceDto, Error> {
        let resource = draft.validate()?;
        self.ensure_category_exists(resource.category).await?;

        let resource = ResourceRepository::new(self.db)
            .create(&resource, true, Some(admin.id))
            .await?;

        self.to_dto(resource).await
    }

    /// Replaces the title, description, URL and category of a resource.
    pub async fn update(&self, resource_id: i32, draft: &ResourceDraft) -> Result<ResourceDto, Error> {
        let resource: ValidResource = draft.validate()?;
        self.ensure_category_exists(resource.category).await?;

        let resource = ResourceRepository::new(self.db)
            .update(resource_id, &resource)
            .await?
            .ok_or(DomainError::not_found("Resource", resource_id))?;

        self.to_dto(resource).await
    }

    /// Approves a resource, making it publicly visible.
    pub async fn approve(&self, resource_id: i32) -> Result<ResourceDto, Error> {
        let resource = ResourceRepository::new(self.db)
            .set_approved(resource_id)
            .await?
            .ok_or(DomainError::not_found("Resource", resource_id))?;

        tracing::info!(resource_id = %resource_id, "Resource approved");

        self.to_dto(resource).await
    }

    /// Deletes a resource and its submission-tracking rows.
    pub async fn delete(&self, resource_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if ResourceRepository::new(&txn).get(resource_id).await?.is_none() {
            return Err(DomainError::not_found("Resource", resource_id).into());
        }

        delete_resources(&txn, &[resource_id]).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn ensure_category_exists(&self, category: CategoryRef) -> Result<(), Error> {
        let exists = match category {
            CategoryRef::Subject(id) => SubjectRepository::new(self.db).get(id).await?.is_some(),
            CategoryRef::Skill(id) => SkillRepository::new(self.db).get(id).await?.is_some(),
            CategoryRef::Exam(id) => ExamRepository::new(self.db).get(id).await?.is_some(),
        };

        if exists {
            return Ok(());
        }

        let (category, id) = match category {
            CategoryRef::Subject(id) => ("subject", id),
            CategoryRef::Skill(id) => ("skill", id),
            CategoryRef::Exam(id) => ("exam", id),
        };

        Err(DomainError::InvalidCategory {
            entity: "Resource",
            category,
            id,
        }
        .into())
    }

    async fn to_dto(&self, resource: ResourceModel) -> Result<ResourceDto, Error> {
        let mut dtos = self.to_dtos(vec![resource]).await?;

        dtos.pop()
            .ok_or_else(|| Error::InternalError("Resource lost while building DTO".to_string()))
    }

    /// Resolves the category names of `resources` with one query per taxonomy level.
    async fn to_dtos(&self, resources: Vec<ResourceModel>) -> Result<Vec<ResourceDto>, Error> {
        let categories = CategoryNames::load(self.db, &resources).await?;

        resources
            .into_iter()
            .map(|resource| {
                let category = categories.resolve(&resource)?;

                Ok(ResourceDto {
                    id: resource.id,
                    title: resource.title,
                    description: resource.description,
                    url: resource.url,
                    category,
                    is_approved: resource.is_approved,
                    submitted_by: resource.submitted_by,
                    created_at: resource.created_at,
                    updated_at: resource.updated_at,
                })
            })
            .collect()
    }
}

/// Category display data for a batch of resources, keyed by subject, skill and exam ID.
struct CategoryNames {
    subjects: HashMap<i32, ResourceCategory>,
    skills: HashMap<i32, ResourceCategory>,
    exams: HashMap<i32, ResourceCategory>,
}

impl CategoryNames {
    async fn load(db: &DatabaseConnection, resources: &[ResourceModel]) -> Result<Self, Error> {
        let subject_ids = unique_ids(resources.iter().filter_map(|r| r.subject_id));
        let skill_ids = unique_ids(resources.iter().filter_map(|r| r.skill_id));
        let exam_ids = unique_ids(resources.iter().filter_map(|r| r.exam_id));

        let mut subjects = HashMap::new();
        if !subject_ids.is_empty() {
            let rows = SubjectRepository::new(db).find_by_ids(&subject_ids).await?;
            let university_ids = unique_ids(
                rows.iter()
                    .filter_map(|(_, domain)| domain.as_ref().map(|d| d.university_id)),
            );
            let universities: HashMap<i32, String> = UniversityRepository::new(db)
                .find_by_ids(&university_ids)
                .await?
                .into_iter()
                .map(|university| (university.id, university.name))
                .collect();

            for (subject, domain) in rows {
                let Some(domain) = domain else { continue };
                let Some(university_name) = universities.get(&domain.university_id) else {
                    continue;
                };

                subjects.insert(
                    subject.id,
                    ResourceCategory::Subject {
                        subject_id: subject.id,
                        subject_name: subject.name,
                        domain_id: domain.id,
                        domain_name: domain.name,
                        university_id: domain.university_id,
                        university_name: university_name.clone(),
                    },
                );
            }
        }

        let mut skills = HashMap::new();
        if !skill_ids.is_empty() {
            for (skill, category) in SkillRepository::new(db).find_by_ids(&skill_ids).await? {
                let Some(category) = category else { continue };

                skills.insert(
                    skill.id,
                    ResourceCategory::Skill {
                        skill_id: skill.id,
                        skill_name: skill.name,
                        category_id: category.id,
                        category_name: category.name,
                    },
                );
            }
        }

        let mut exams = HashMap::new();
        if !exam_ids.is_empty() {
            for (exam, category) in ExamRepository::new(db).find_by_ids(&exam_ids).await? {
                let Some(category) = category else { continue };

                exams.insert(
                    exam.id,
                    ResourceCategory::Exam {
                        exam_id: exam.id,
                        exam_name: exam.name,
                        category_id: category.id,
                        category_name: category.name,
                    },
                );
            }
        }

        Ok(Self {
            subjects,
            skills,
            exams,
        })
    }

    fn resolve(&self, resource: &ResourceModel) -> Result<ResourceCategory, Error> {
        let category =
            CategoryRef::from_columns(resource.subject_id, resource.skill_id, resource.exam_id);

        let resolved = match category {
            Some(CategoryRef::Subject(id)) => self.subjects.get(&id),
            Some(CategoryRef::Skill(id)) => self.skills.get(&id),
            Some(CategoryRef::Exam(id)) => self.exams.get(&id),
            None => None,
        };

        resolved.cloned().ok_or_else(|| {
            Error::InternalError(format!(
                "Resource ID {} does not reference exactly one existing category",
                resource.id
            ))
        })
    }
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}
