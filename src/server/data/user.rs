use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::user::Role, server::model::db::UserProfileModel};

/// Profile details taken from a verified Google ID token.
#[derive(Clone, Debug)]
pub struct GoogleProfile {
    pub google_id: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

pub struct UserProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserProfileRepository<'a, C> {
    /// Creates a new instance of [`UserProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a profile with the `user` role
    pub async fn create(&self, profile: &GoogleProfile) -> Result<UserProfileModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::user_profile::ActiveModel {
            google_id: ActiveValue::Set(profile.google_id.clone()),
            email: ActiveValue::Set(profile.email.clone()),
            full_name: ActiveValue::Set(profile.full_name.clone()),
            avatar_url: ActiveValue::Set(profile.avatar_url.clone()),
            role: ActiveValue::Set(Role::User.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserProfileModel>, DbErr> {
        entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_google_id(
        &self,
        google_id: &str,
    ) -> Result<Option<UserProfileModel>, DbErr> {
        entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await
    }

    /// Lists every profile, oldest first
    pub async fn list(&self) -> Result<Vec<UserProfileModel>, DbErr> {
        entity::prelude::UserProfile::find()
            .order_by_asc(entity::user_profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Refreshes the email, name and avatar of an existing profile
    pub async fn refresh(
        &self,
        existing: UserProfileModel,
        profile: &GoogleProfile,
    ) -> Result<UserProfileModel, DbErr> {
        let mut user_am = existing.into_active_model();
        user_am.email = ActiveValue::Set(profile.email.clone());
        user_am.full_name = ActiveValue::Set(profile.full_name.clone());
        user_am.avatar_url = ActiveValue::Set(profile.avatar_url.clone());
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Sets the role of a profile, returns `Ok(None)` if it does not exist
    pub async fn set_role(
        &self,
        user_id: i32,
        role: Role,
    ) -> Result<Option<UserProfileModel>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.role = ActiveValue::Set(role.as_str().to_string());
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes a profile
    ///
    /// Returns OK regardless of the profile existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserProfile::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
