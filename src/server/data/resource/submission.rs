use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::server::model::db::ResourceSubmissionModel;

/// Repository for the rows tracking which user submitted which resource.
pub struct ResourceSubmissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceSubmissionRepository<'a, C> {
    /// Creates a new instance of [`ResourceSubmissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        resource_id: i32,
    ) -> Result<ResourceSubmissionModel, DbErr> {
        entity::resource_submission::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            resource_id: ActiveValue::Set(resource_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<ResourceSubmissionModel>, DbErr> {
        entity::prelude::ResourceSubmission::find()
            .filter(entity::resource_submission::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes tracking rows for any of the provided resources
    pub async fn delete_by_resources(&self, resource_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::ResourceSubmission::delete_many()
            .filter(
                entity::resource_submission::Column::ResourceId.is_in(resource_ids.iter().copied()),
            )
            .exec(self.db)
            .await
    }

    /// Deletes every tracking row of a user
    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ResourceSubmission::delete_many()
            .filter(entity::resource_submission::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
