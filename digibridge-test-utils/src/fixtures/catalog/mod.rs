//! Catalog fixture utilities.
//!
//! Inserts taxonomy rows: the University → Domain → Subject hierarchy and the
//! SkillCategory → Skill and ExamCategory → Exam taxonomies.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    model::{
        DomainModel, ExamCategoryModel, ExamModel, SkillCategoryModel, SkillModel, SubjectModel,
        UniversityModel,
    },
    TestContext, TestError,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_university(&mut self, name: &str) -> Result<UniversityModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::university::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_domain(
        &mut self,
        university_id: i32,
        name: &str,
    ) -> Result<DomainModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::domain::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            university_id: ActiveValue::Set(university_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_subject(
        &mut self,
        domain_id: i32,
        name: &str,
    ) -> Result<SubjectModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::subject::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            domain_id: ActiveValue::Set(domain_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a university with a single "Engineering" domain holding a single
    /// "Data Structures" subject.
    pub async fn insert_hierarchy(
        &mut self,
        university_name: &str,
    ) -> Result<(UniversityModel, DomainModel, SubjectModel), TestError> {
        let university = self.insert_university(university_name).await?;
        let domain = self.insert_domain(university.id, "Engineering").await?;
        let subject = self.insert_subject(domain.id, "Data Structures").await?;

        Ok((university, domain, subject))
    }

    pub async fn insert_skill_category(
        &mut self,
        name: &str,
    ) -> Result<SkillCategoryModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::skill_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_skill(
        &mut self,
        category_id: i32,
        name: &str,
    ) -> Result<SkillModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::skill::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category_id: ActiveValue::Set(category_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_exam_category(
        &mut self,
        name: &str,
    ) -> Result<ExamCategoryModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::exam_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_exam(
        &mut self,
        category_id: i32,
        name: &str,
    ) -> Result<ExamModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::exam::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category_id: ActiveValue::Set(category_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
