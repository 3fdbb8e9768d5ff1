//! Repositories for the top level of the skill and exam taxonomies.
//!
//! Skill categories and exam categories share one shape, a unique name, but live in
//! separate tables.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::{ExamCategoryModel, SkillCategoryModel};

pub struct SkillCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillCategoryRepository<'a, C> {
    /// Creates a new instance of [`SkillCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<SkillCategoryModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::skill_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, category_id: i32) -> Result<Option<SkillCategoryModel>, DbErr> {
        entity::prelude::SkillCategory::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<SkillCategoryModel>, DbErr> {
        entity::prelude::SkillCategory::find()
            .order_by_asc(entity::skill_category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<Option<SkillCategoryModel>, DbErr> {
        let Some(category) = self.get(category_id).await? else {
            return Ok(None);
        };

        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(name.to_string());
        category_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(category_am.update(self.db).await?))
    }

    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SkillCategory::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}

pub struct ExamCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamCategoryRepository<'a, C> {
    /// Creates a new instance of [`ExamCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<ExamCategoryModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::exam_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, category_id: i32) -> Result<Option<ExamCategoryModel>, DbErr> {
        entity::prelude::ExamCategory::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<ExamCategoryModel>, DbErr> {
        entity::prelude::ExamCategory::find()
            .order_by_asc(entity::exam_category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<Option<ExamCategoryModel>, DbErr> {
        let Some(category) = self.get(category_id).await? else {
            return Ok(None);
        };

        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(name.to_string());
        category_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(category_am.update(self.db).await?))
    }

    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ExamCategory::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
