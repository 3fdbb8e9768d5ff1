use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{DomainModel, UniversityModel};

pub struct DomainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DomainRepository<'a, C> {
    /// Creates a new instance of [`DomainRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a domain under a university
    ///
    /// Fails with a foreign key error if the university does not exist.
    pub async fn create(&self, university_id: i32, name: &str) -> Result<DomainModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::domain::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            university_id: ActiveValue::Set(university_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, domain_id: i32) -> Result<Option<DomainModel>, DbErr> {
        entity::prelude::Domain::find_by_id(domain_id)
            .one(self.db)
            .await
    }

    /// Gets a domain along with the university it belongs to
    pub async fn get_with_university(
        &self,
        domain_id: i32,
    ) -> Result<Option<(DomainModel, Option<UniversityModel>)>, DbErr> {
        entity::prelude::Domain::find_by_id(domain_id)
            .find_also_related(entity::university::Entity)
            .one(self.db)
            .await
    }

    /// Lists every domain with its university, ordered by name
    pub async fn list(&self) -> Result<Vec<(DomainModel, Option<UniversityModel>)>, DbErr> {
        entity::prelude::Domain::find()
            .find_also_related(entity::university::Entity)
            .order_by_asc(entity::domain::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the domains of a university ordered by name
    pub async fn list_by_university(&self, university_id: i32) -> Result<Vec<DomainModel>, DbErr> {
        entity::prelude::Domain::find()
            .filter(entity::domain::Column::UniversityId.eq(university_id))
            .order_by_asc(entity::domain::Column::Name)
            .all(self.db)
            .await
    }

    /// Renames and re-parents a domain, returns `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        domain_id: i32,
        university_id: i32,
        name: &str,
    ) -> Result<Option<DomainModel>, DbErr> {
        let Some(domain) = self.get(domain_id).await? else {
            return Ok(None);
        };

        let mut domain_am = domain.into_active_model();
        domain_am.name = ActiveValue::Set(name.to_string());
        domain_am.university_id = ActiveValue::Set(university_id);
        domain_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(domain_am.update(self.db).await?))
    }

    /// Deletes the domains with the provided IDs
    pub async fn delete_many(&self, domain_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Domain::delete_many()
            .filter(entity::domain::Column::Id.is_in(domain_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
