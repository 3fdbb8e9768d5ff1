//! Admin writes for the skill and exam taxonomies.

use sea_orm::TransactionTrait;

use crate::{
    model::{
        catalog::{CategoryDto, ExamDto, ExamPayload, NamedEntityDto, SkillDto, SkillPayload},
        validation::validate_name,
    },
    server::{
        data::{
            catalog::{
                category::{ExamCategoryRepository, SkillCategoryRepository},
                exam::ExamRepository,
                skill::SkillRepository,
            },
            resource::ResourceRepository,
        },
        error::{domain::DomainError, Error},
        service::{
            catalog::{
                duplicate_name, exam_category_dto, exam_dto, skill_category_dto, skill_dto,
                CatalogService,
            },
            resource::delete_resources,
        },
    },
};

impl<'a> CatalogService<'a> {
    pub async fn create_skill_category(&self, payload: NamedEntityDto) -> Result<CategoryDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = SkillCategoryRepository::new(self.db)
            .create(&name)
            .await
            .map_err(duplicate_name("Skill category", &name))?;

        Ok(skill_category_dto(category))
    }

    pub async fn update_skill_category(
        &self,
        category_id: i32,
        payload: NamedEntityDto,
    ) -> Result<CategoryDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = SkillCategoryRepository::new(self.db)
            .update(category_id, &name)
            .await
            .map_err(duplicate_name("Skill category", &name))?
            .ok_or(DomainError::not_found("Skill category", category_id))?;

        Ok(skill_category_dto(category))
    }

    /// Deletes a skill category with its skills and their resources, in one transaction.
    pub async fn delete_skill_category(&self, category_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let category_repo = SkillCategoryRepository::new(&txn);
        if category_repo.get(category_id).await?.is_none() {
            return Err(DomainError::not_found("Skill category", category_id).into());
        }

        let skill_repo = SkillRepository::new(&txn);
        let skill_ids: Vec<i32> = skill_repo
            .list_by_category(category_id)
            .await?
            .into_iter()
            .map(|skill| skill.id)
            .collect();
        let resource_ids = ResourceRepository::new(&txn)
            .find_ids_by_skills(&skill_ids)
            .await?;

        delete_resources(&txn, &resource_ids).await?;
        skill_repo.delete_many(&skill_ids).await?;
        category_repo.delete(category_id).await?;

        txn.commit().await?;

        tracing::info!(
            category_id = %category_id,
            skills = skill_ids.len(),
            resources = resource_ids.len(),
            "Deleted skill category"
        );

        Ok(())
    }

    /// Creates a skill under an existing skill category.
    pub async fn create_skill(&self, payload: SkillPayload) -> Result<SkillDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = SkillCategoryRepository::new(self.db)
            .get(payload.category_id)
            .await?
            .ok_or(DomainError::not_found("Skill category", payload.category_id))?;

        let skill = SkillRepository::new(self.db)
            .create(category.id, &name)
            .await?;

        Ok(skill_dto(skill, &category))
    }

    pub async fn update_skill(&self, skill_id: i32, payload: SkillPayload) -> Result<SkillDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = SkillCategoryRepository::new(self.db)
            .get(payload.category_id)
            .await?
            .ok_or(DomainError::not_found("Skill category", payload.category_id))?;

        let skill = SkillRepository::new(self.db)
            .update(skill_id, category.id, &name)
            .await?
            .ok_or(DomainError::not_found("Skill", skill_id))?;

        Ok(skill_dto(skill, &category))
    }

    /// Deletes a skill with its resources, in one transaction.
    pub async fn delete_skill(&self, skill_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let skill_repo = SkillRepository::new(&txn);
        if skill_repo.get(skill_id).await?.is_none() {
            return Err(DomainError::not_found("Skill", skill_id).into());
        }

        let resource_ids = ResourceRepository::new(&txn)
            .find_ids_by_skills(&[skill_id])
            .await?;

        delete_resources(&txn, &resource_ids).await?;
        skill_repo.delete_many(&[skill_id]).await?;

        txn.commit().await?;

        tracing::info!(skill_id = %skill_id, "Deleted skill");

        Ok(())
    }

    pub async fn create_exam_category(&self, payload: NamedEntityDto) -> Result<CategoryDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = ExamCategoryRepository::new(self.db)
            .create(&name)
            .await
            .map_err(duplicate_name("Exam category", &name))?;

        Ok(exam_category_dto(category))
    }

    pub async fn update_exam_category(
        &self,
        category_id: i32,
        payload: NamedEntityDto,
    ) -> Result<CategoryDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = ExamCategoryRepository::new(self.db)
            .update(category_id, &name)
            .await
            .map_err(duplicate_name("Exam category", &name))?
            .ok_or(DomainError::not_found("Exam category", category_id))?;

        Ok(exam_category_dto(category))
    }

    /// Deletes an exam category with its exams and their resources, in one transaction.
    pub async fn delete_exam_category(&self, category_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let category_repo = ExamCategoryRepository::new(&txn);
        if category_repo.get(category_id).await?.is_none() {
            return Err(DomainError::not_found("Exam category", category_id).into());
        }

        let exam_repo = ExamRepository::new(&txn);
        let exam_ids: Vec<i32> = exam_repo
            .list_by_category(category_id)
            .await?
            .into_iter()
            .map(|exam| exam.id)
            .collect();
        let resource_ids = ResourceRepository::new(&txn)
            .find_ids_by_exams(&exam_ids)
            .await?;

        delete_resources(&txn, &resource_ids).await?;
        exam_repo.delete_many(&exam_ids).await?;
        category_repo.delete(category_id).await?;

        txn.commit().await?;

        tracing::info!(
            category_id = %category_id,
            exams = exam_ids.len(),
            resources = resource_ids.len(),
            "Deleted exam category"
        );

        Ok(())
    }

    /// Creates an exam under an existing exam category.
    pub async fn create_exam(&self, payload: ExamPayload) -> Result<ExamDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = ExamCategoryRepository::new(self.db)
            .get(payload.category_id)
            .await?
            .ok_or(DomainError::not_found("Exam category", payload.category_id))?;

        let exam = ExamRepository::new(self.db)
            .create(category.id, &name)
            .await?;

        Ok(exam_dto(exam, &category))
    }

    pub async fn update_exam(&self, exam_id: i32, payload: ExamPayload) -> Result<ExamDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let category = ExamCategoryRepository::new(self.db)
            .get(payload.category_id)
            .await?
            .ok_or(DomainError::not_found("Exam category", payload.category_id))?;

        let exam = ExamRepository::new(self.db)
            .update(exam_id, category.id, &name)
            .await?
            .ok_or(DomainError::not_found("Exam", exam_id))?;

        Ok(exam_dto(exam, &category))
    }

    /// Deletes an exam with its resources, in one transaction.
    pub async fn delete_exam(&self, exam_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let exam_repo = ExamRepository::new(&txn);
        if exam_repo.get(exam_id).await?.is_none() {
            return Err(DomainError::not_found("Exam", exam_id).into());
        }

        let resource_ids = ResourceRepository::new(&txn)
            .find_ids_by_exams(&[exam_id])
            .await?;

        delete_resources(&txn, &resource_ids).await?;
        exam_repo.delete_many(&[exam_id]).await?;

        txn.commit().await?;

        tracing::info!(exam_id = %exam_id, "Deleted exam");

        Ok(())
    }
}
