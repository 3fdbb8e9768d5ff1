//! Taxonomy service.
//!
//! Public reads walk the University → Domain → Subject hierarchy and the two-level skill and
//! exam taxonomies. Admin writes validate names, check that parents exist, map unique
//! constraint violations to conflicts and delete children in the same transaction as their
//! parent.

mod academic;
mod taxonomy;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::catalog::{
        CategoryDto, DomainDto, ExamDto, SkillDto, SubjectDto, UniversityDto,
    },
    server::{
        data::{
            catalog::{
                category::{ExamCategoryRepository, SkillCategoryRepository},
                domain::DomainRepository,
                exam::ExamRepository,
                skill::SkillRepository,
                subject::SubjectRepository,
                university::UniversityRepository,
            },
            request::ResourceRequestRepository,
            resource::ResourceRepository,
        },
        error::{domain::DomainError, is_unique_violation, Error},
        model::db::{
            DomainModel, ExamCategoryModel, ExamModel, SkillCategoryModel, SkillModel,
            SubjectModel, UniversityModel,
        },
        service::resource::delete_resources,
    },
};

/// Service for reading and administering the taxonomies.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_universities(&self) -> Result<Vec<UniversityDto>, Error> {
        let universities = UniversityRepository::new(self.db).list().await?;

        Ok(universities.into_iter().map(university_dto).collect())
    }

    /// Lists the domains of a university.
    ///
    /// # Returns
    /// - `Ok(Vec<DomainDto>)` - Domains ordered by name, possibly empty
    /// - `Err(DomainError::NotFound)` - University does not exist
    pub async fn list_domains(&self, university_id: i32) -> Result<Vec<DomainDto>, Error> {
        let university = UniversityRepository::new(self.db)
            .get(university_id)
            .await?
            .ok_or(DomainError::not_found("University", university_id))?;

        let domains = DomainRepository::new(self.db)
            .list_by_university(university_id)
            .await?;

        Ok(domains
            .into_iter()
            .map(|domain| domain_dto(domain, &university))
            .collect())
    }

    /// Lists the subjects of a domain.
    ///
    /// # Returns
    /// - `Ok(Vec<SubjectDto>)` - Subjects ordered by name, possibly empty
    /// - `Err(DomainError::NotFound)` - Domain does not exist
    pub async fn list_subjects(&self, domain_id: i32) -> Result<Vec<SubjectDto>, Error> {
        let (domain, university) = DomainRepository::new(self.db)
            .get_with_university(domain_id)
            .await?
            .ok_or(DomainError::not_found("Domain", domain_id))?;
        let university = require_parent(university, "Domain", domain.id)?;

        let subjects = SubjectRepository::new(self.db)
            .list_by_domain(domain_id)
            .await?;

        Ok(subjects
            .into_iter()
            .map(|subject| subject_dto(subject, &domain, &university))
            .collect())
    }

    pub async fn list_skill_categories(&self) -> Result<Vec<CategoryDto>, Error> {
        let categories = SkillCategoryRepository::new(self.db).list().await?;

        Ok(categories.into_iter().map(skill_category_dto).collect())
    }

    /// Lists the skills of a skill category, 404 if the category does not exist.
    pub async fn list_skills(&self, category_id: i32) -> Result<Vec<SkillDto>, Error> {
        let category = SkillCategoryRepository::new(self.db)
            .get(category_id)
            .await?
            .ok_or(DomainError::not_found("Skill category", category_id))?;

        let skills = SkillRepository::new(self.db)
            .list_by_category(category_id)
            .await?;

        Ok(skills
            .into_iter()
            .map(|skill| skill_dto(skill, &category))
            .collect())
    }

    pub async fn list_exam_categories(&self) -> Result<Vec<CategoryDto>, Error> {
        let categories = ExamCategoryRepository::new(self.db).list().await?;

        Ok(categories.into_iter().map(exam_category_dto).collect())
    }

    /// Lists the exams of an exam category, 404 if the category does not exist.
    pub async fn list_exams(&self, category_id: i32) -> Result<Vec<ExamDto>, Error> {
        let category = ExamCategoryRepository::new(self.db)
            .get(category_id)
            .await?
            .ok_or(DomainError::not_found("Exam category", category_id))?;

        let exams = ExamRepository::new(self.db)
            .list_by_category(category_id)
            .await?;

        Ok(exams
            .into_iter()
            .map(|exam| exam_dto(exam, &category))
            .collect())
    }

    /// Lists every domain with its university name, for the admin domains tab.
    pub async fn list_all_domains(&self) -> Result<Vec<DomainDto>, Error> {
        let domains = DomainRepository::new(self.db).list().await?;

        domains
            .into_iter()
            .map(|(domain, university)| {
                let university = require_parent(university, "Domain", domain.id)?;
                Ok(domain_dto(domain, &university))
            })
            .collect()
    }

    /// Lists every subject with its domain and university names, for the admin subjects tab.
    pub async fn list_all_subjects(&self) -> Result<Vec<SubjectDto>, Error> {
        let subjects = SubjectRepository::new(self.db).list().await?;
        let universities: HashMap<i32, UniversityModel> = UniversityRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(|university| (university.id, university))
            .collect();

        subjects
            .into_iter()
            .map(|(subject, domain)| {
                let domain = require_parent(domain, "Subject", subject.id)?;
                let university = universities
                    .get(&domain.university_id)
                    .ok_or_else(|| missing_parent("Domain", domain.id))?;

                Ok(subject_dto(subject, &domain, university))
            })
            .collect()
    }

    /// Lists every skill with its category name, for the admin skills tab.
    pub async fn list_all_skills(&self) -> Result<Vec<SkillDto>, Error> {
        let skills = SkillRepository::new(self.db).list().await?;

        skills
            .into_iter()
            .map(|(skill, category)| {
                let category = require_parent(category, "Skill", skill.id)?;
                Ok(skill_dto(skill, &category))
            })
            .collect()
    }

    /// Lists every exam with its category name, for the admin exams tab.
    pub async fn list_all_exams(&self) -> Result<Vec<ExamDto>, Error> {
        let exams = ExamRepository::new(self.db).list().await?;

        exams
            .into_iter()
            .map(|(exam, category)| {
                let category = require_parent(category, "Exam", exam.id)?;
                Ok(exam_dto(exam, &category))
            })
            .collect()
    }
}

/// Deletes subjects together with their resources and requests.
async fn delete_subjects<C: ConnectionTrait>(db: &C, subject_ids: &[i32]) -> Result<(), DbErr> {
    if subject_ids.is_empty() {
        return Ok(());
    }

    let resource_ids = ResourceRepository::new(db)
        .find_ids_by_subjects(subject_ids)
        .await?;
    delete_resources(db, &resource_ids).await?;

    ResourceRequestRepository::new(db)
        .delete_by_subjects(subject_ids)
        .await?;
    SubjectRepository::new(db).delete_many(subject_ids).await?;

    Ok(())
}

/// Maps a unique constraint violation on `name` to [`DomainError::Duplicate`].
fn duplicate_name(entity: &'static str, name: &str) -> impl FnOnce(DbErr) -> Error {
    let name = name.to_string();

    move |err| {
        if is_unique_violation(&err) {
            DomainError::Duplicate { entity, name }.into()
        } else {
            err.into()
        }
    }
}

fn require_parent<T>(parent: Option<T>, entity: &str, id: i32) -> Result<T, Error> {
    parent.ok_or_else(|| missing_parent(entity, id))
}

// Only reachable if a foreign key constraint is not enforced
fn missing_parent(entity: &str, id: i32) -> Error {
    Error::InternalError(format!("{} ID {} references a missing parent", entity, id))
}

fn university_dto(university: UniversityModel) -> UniversityDto {
    UniversityDto {
        id: university.id,
        name: university.name,
    }
}

fn domain_dto(domain: DomainModel, university: &UniversityModel) -> DomainDto {
    DomainDto {
        id: domain.id,
        name: domain.name,
        university_id: university.id,
        university_name: university.name.clone(),
    }
}

fn subject_dto(
    subject: SubjectModel,
    domain: &DomainModel,
    university: &UniversityModel,
) -> SubjectDto {
    SubjectDto {
        id: subject.id,
        name: subject.name,
        domain_id: domain.id,
        domain_name: domain.name.clone(),
        university_id: university.id,
        university_name: university.name.clone(),
    }
}

fn skill_category_dto(category: SkillCategoryModel) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name,
    }
}

fn exam_category_dto(category: ExamCategoryModel) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name,
    }
}

fn skill_dto(skill: SkillModel, category: &SkillCategoryModel) -> SkillDto {
    SkillDto {
        id: skill.id,
        name: skill.name,
        category_id: category.id,
        category_name: category.name.clone(),
    }
}

fn exam_dto(exam: ExamModel, category: &ExamCategoryModel) -> ExamDto {
    ExamDto {
        id: exam.id,
        name: exam.name,
        category_id: category.id,
        category_name: category.name.clone(),
    }
}
