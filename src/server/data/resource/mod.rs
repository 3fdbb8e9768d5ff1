//! Resource and submission-tracking repositories.

pub mod submission;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
    UpdateResult,
};

use crate::{model::validation::ValidResource, server::model::db::ResourceModel};

pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    /// Creates a new instance of [`ResourceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a validated resource
    ///
    /// # Arguments
    /// - `resource` - Validated title, description, URL and category
    /// - `is_approved` - Whether the resource is immediately public
    /// - `submitted_by` - Profile ID of the submitter, if any
    pub async fn create(
        &self,
        resource: &ValidResource,
        is_approved: bool,
        submitted_by: Option<i32>,
    ) -> Result<ResourceModel, DbErr> {
        let now = Utc::now().naive_utc();
        let (subject_id, skill_id, exam_id) = resource.category.columns();

        entity::resource::ActiveModel {
            title: ActiveValue::Set(resource.title.clone()),
            description: ActiveValue::Set(resource.description.clone()),
            url: ActiveValue::Set(resource.url.clone()),
            subject_id: ActiveValue::Set(subject_id),
            skill_id: ActiveValue::Set(skill_id),
            exam_id: ActiveValue::Set(exam_id),
            is_approved: ActiveValue::Set(is_approved),
            submitted_by: ActiveValue::Set(submitted_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, resource_id: i32) -> Result<Option<ResourceModel>, DbErr> {
        entity::prelude::Resource::find_by_id(resource_id)
            .one(self.db)
            .await
    }

    /// Lists approved resources, newest first
    pub async fn list_approved(&self) -> Result<Vec<ResourceModel>, DbErr> {
        self.list_by_approval(Some(true)).await
    }

    /// Lists resources awaiting moderation, newest first
    pub async fn list_pending(&self) -> Result<Vec<ResourceModel>, DbErr> {
        self.list_by_approval(Some(false)).await
    }

    /// Lists every resource regardless of approval, newest first
    pub async fn list_all(&self) -> Result<Vec<ResourceModel>, DbErr> {
        self.list_by_approval(None).await
    }

    async fn list_by_approval(&self, approved: Option<bool>) -> Result<Vec<ResourceModel>, DbErr> {
        let mut query = entity::prelude::Resource::find();

        if let Some(approved) = approved {
            query = query.filter(entity::resource::Column::IsApproved.eq(approved));
        }

        query
            .order_by_desc(entity::resource::Column::CreatedAt)
            .order_by_desc(entity::resource::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks a resource as approved, returns `Ok(None)` if it does not exist
    pub async fn set_approved(&self, resource_id: i32) -> Result<Option<ResourceModel>, DbErr> {
        let Some(resource) = self.get(resource_id).await? else {
            return Ok(None);
        };

        let mut resource_am = resource.into_active_model();
        resource_am.is_approved = ActiveValue::Set(true);
        resource_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(resource_am.update(self.db).await?))
    }

    /// Replaces the editable fields of a resource, returns `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        resource_id: i32,
        resource: &ValidResource,
    ) -> Result<Option<ResourceModel>, DbErr> {
        let Some(existing) = self.get(resource_id).await? else {
            return Ok(None);
        };
        let (subject_id, skill_id, exam_id) = resource.category.columns();

        let mut resource_am = existing.into_active_model();
        resource_am.title = ActiveValue::Set(resource.title.clone());
        resource_am.description = ActiveValue::Set(resource.description.clone());
        resource_am.url = ActiveValue::Set(resource.url.clone());
        resource_am.subject_id = ActiveValue::Set(subject_id);
        resource_am.skill_id = ActiveValue::Set(skill_id);
        resource_am.exam_id = ActiveValue::Set(exam_id);
        resource_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(resource_am.update(self.db).await?))
    }

    /// IDs of resources filed under any of the provided subjects
    pub async fn find_ids_by_subjects(&self, subject_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        self.find_ids_where(entity::resource::Column::SubjectId, subject_ids)
            .await
    }

    /// IDs of resources filed under any of the provided skills
    pub async fn find_ids_by_skills(&self, skill_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        self.find_ids_where(entity::resource::Column::SkillId, skill_ids)
            .await
    }

    /// IDs of resources filed under any of the provided exams
    pub async fn find_ids_by_exams(&self, exam_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        self.find_ids_where(entity::resource::Column::ExamId, exam_ids)
            .await
    }

    async fn find_ids_where(
        &self,
        column: entity::resource::Column,
        ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Resource::find()
            .select_only()
            .column(entity::resource::Column::Id)
            .filter(column.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Clears `submitted_by` on every resource submitted by a user
    pub async fn clear_submitter(&self, user_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Resource::update_many()
            .col_expr(
                entity::resource::Column::SubmittedBy,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::resource::Column::SubmittedBy.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Deletes the resources with the provided IDs
    pub async fn delete_many(&self, resource_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Resource::delete_many()
            .filter(entity::resource::Column::Id.is_in(resource_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
