use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::UniversityModel;

pub struct UniversityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UniversityRepository<'a, C> {
    /// Creates a new instance of [`UniversityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a university, fails with a unique constraint violation if the name is taken
    pub async fn create(&self, name: &str) -> Result<UniversityModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::university::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, university_id: i32) -> Result<Option<UniversityModel>, DbErr> {
        entity::prelude::University::find_by_id(university_id)
            .one(self.db)
            .await
    }

    /// Lists every university ordered by name
    pub async fn list(&self) -> Result<Vec<UniversityModel>, DbErr> {
        entity::prelude::University::find()
            .order_by_asc(entity::university::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the universities with the provided IDs, missing IDs are skipped
    pub async fn find_by_ids(&self, university_ids: &[i32]) -> Result<Vec<UniversityModel>, DbErr> {
        entity::prelude::University::find()
            .filter(entity::university::Column::Id.is_in(university_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Renames a university, returns `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        university_id: i32,
        name: &str,
    ) -> Result<Option<UniversityModel>, DbErr> {
        let Some(university) = self.get(university_id).await? else {
            return Ok(None);
        };

        let mut university_am = university.into_active_model();
        university_am.name = ActiveValue::Set(name.to_string());
        university_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(university_am.update(self.db).await?))
    }

    /// Deletes a university
    ///
    /// Returns OK regardless of the university existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, university_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::University::delete_by_id(university_id)
            .exec(self.db)
            .await
    }
}
