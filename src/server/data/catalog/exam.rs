use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{ExamCategoryModel, ExamModel};

pub struct ExamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamRepository<'a, C> {
    /// Creates a new instance of [`ExamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, category_id: i32, name: &str) -> Result<ExamModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::exam::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category_id: ActiveValue::Set(category_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, exam_id: i32) -> Result<Option<ExamModel>, DbErr> {
        entity::prelude::Exam::find_by_id(exam_id)
            .one(self.db)
            .await
    }

    /// Lists every exam with its category, ordered by name
    pub async fn list(&self) -> Result<Vec<(ExamModel, Option<ExamCategoryModel>)>, DbErr> {
        entity::prelude::Exam::find()
            .find_also_related(entity::exam_category::Entity)
            .order_by_asc(entity::exam::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the exams of a category ordered by name
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<ExamModel>, DbErr> {
        entity::prelude::Exam::find()
            .filter(entity::exam::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::exam::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets exams with their categories by exam ID
    pub async fn find_by_ids(
        &self,
        exam_ids: &[i32],
    ) -> Result<Vec<(ExamModel, Option<ExamCategoryModel>)>, DbErr> {
        entity::prelude::Exam::find()
            .filter(entity::exam::Column::Id.is_in(exam_ids.iter().copied()))
            .find_also_related(entity::exam_category::Entity)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        exam_id: i32,
        category_id: i32,
        name: &str,
    ) -> Result<Option<ExamModel>, DbErr> {
        let Some(exam) = self.get(exam_id).await? else {
            return Ok(None);
        };

        let mut exam_am = exam.into_active_model();
        exam_am.name = ActiveValue::Set(name.to_string());
        exam_am.category_id = ActiveValue::Set(category_id);
        exam_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(exam_am.update(self.db).await?))
    }

    pub async fn delete_many(&self, exam_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Exam::delete_many()
            .filter(entity::exam::Column::Id.is_in(exam_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
