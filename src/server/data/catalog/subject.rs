use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{DomainModel, SubjectModel};

pub struct SubjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubjectRepository<'a, C> {
    /// Creates a new instance of [`SubjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a subject under a domain
    pub async fn create(&self, domain_id: i32, name: &str) -> Result<SubjectModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::subject::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            domain_id: ActiveValue::Set(domain_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, subject_id: i32) -> Result<Option<SubjectModel>, DbErr> {
        entity::prelude::Subject::find_by_id(subject_id)
            .one(self.db)
            .await
    }

    /// Lists every subject with its domain, ordered by name
    pub async fn list(&self) -> Result<Vec<(SubjectModel, Option<DomainModel>)>, DbErr> {
        entity::prelude::Subject::find()
            .find_also_related(entity::domain::Entity)
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the subjects of a domain ordered by name
    pub async fn list_by_domain(&self, domain_id: i32) -> Result<Vec<SubjectModel>, DbErr> {
        entity::prelude::Subject::find()
            .filter(entity::subject::Column::DomainId.eq(domain_id))
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the subjects belonging to any of the provided domains
    pub async fn list_by_domains(&self, domain_ids: &[i32]) -> Result<Vec<SubjectModel>, DbErr> {
        entity::prelude::Subject::find()
            .filter(entity::subject::Column::DomainId.is_in(domain_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets subjects with their domains by subject ID
    pub async fn find_by_ids(
        &self,
        subject_ids: &[i32],
    ) -> Result<Vec<(SubjectModel, Option<DomainModel>)>, DbErr> {
        entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(subject_ids.iter().copied()))
            .find_also_related(entity::domain::Entity)
            .all(self.db)
            .await
    }

    /// Renames and re-parents a subject, returns `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        subject_id: i32,
        domain_id: i32,
        name: &str,
    ) -> Result<Option<SubjectModel>, DbErr> {
        let Some(subject) = self.get(subject_id).await? else {
            return Ok(None);
        };

        let mut subject_am = subject.into_active_model();
        subject_am.name = ActiveValue::Set(name.to_string());
        subject_am.domain_id = ActiveValue::Set(domain_id);
        subject_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(subject_am.update(self.db).await?))
    }

    /// Deletes the subjects with the provided IDs
    pub async fn delete_many(&self, subject_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subject::delete_many()
            .filter(entity::subject::Column::Id.is_in(subject_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
