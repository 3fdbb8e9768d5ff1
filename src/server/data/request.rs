use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{request::RequestStatus, validation::ValidRequest},
    server::model::db::{ResourceRequestModel, SubjectModel},
};

pub struct ResourceRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRequestRepository<'a, C> {
    /// Creates a new instance of [`ResourceRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a validated request with the `pending` status
    pub async fn create(
        &self,
        user_id: i32,
        request: &ValidRequest,
    ) -> Result<ResourceRequestModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::resource_request::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            subject_id: ActiveValue::Set(request.subject_id),
            title: ActiveValue::Set(request.title.clone()),
            description: ActiveValue::Set(request.description.clone()),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, request_id: i32) -> Result<Option<ResourceRequestModel>, DbErr> {
        entity::prelude::ResourceRequest::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Lists a user's requests with their subjects, newest first
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(ResourceRequestModel, Option<SubjectModel>)>, DbErr> {
        entity::prelude::ResourceRequest::find()
            .filter(entity::resource_request::Column::UserId.eq(user_id))
            .find_also_related(entity::subject::Entity)
            .order_by_desc(entity::resource_request::Column::CreatedAt)
            .order_by_desc(entity::resource_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists every request with its subject, newest first
    pub async fn list_all(
        &self,
    ) -> Result<Vec<(ResourceRequestModel, Option<SubjectModel>)>, DbErr> {
        entity::prelude::ResourceRequest::find()
            .find_also_related(entity::subject::Entity)
            .order_by_desc(entity::resource_request::Column::CreatedAt)
            .order_by_desc(entity::resource_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status of a request, returns `Ok(None)` if it does not exist
    pub async fn update_status(
        &self,
        request_id: i32,
        status: RequestStatus,
    ) -> Result<Option<ResourceRequestModel>, DbErr> {
        let Some(request) = self.get(request_id).await? else {
            return Ok(None);
        };

        let mut request_am = request.into_active_model();
        request_am.status = ActiveValue::Set(status.as_str().to_string());
        request_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(request_am.update(self.db).await?))
    }

    pub async fn delete(&self, request_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ResourceRequest::delete_by_id(request_id)
            .exec(self.db)
            .await
    }

    /// Deletes requests for any of the provided subjects
    pub async fn delete_by_subjects(&self, subject_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::ResourceRequest::delete_many()
            .filter(entity::resource_request::Column::SubjectId.is_in(subject_ids.iter().copied()))
            .exec(self.db)
            .await
    }

    /// Deletes every request made by a user
    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ResourceRequest::delete_many()
            .filter(entity::resource_request::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
