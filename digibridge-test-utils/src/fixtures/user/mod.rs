//! User profile fixture utilities.

pub mod factory;

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::UserProfileModel, TestContext, TestError};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a profile with the `user` role.
    pub async fn insert_user(&mut self, google_id: &str) -> Result<UserProfileModel, TestError> {
        self.insert_user_with_role(google_id, "user").await
    }

    /// Insert a profile with the `admin` role.
    pub async fn insert_admin(&mut self, google_id: &str) -> Result<UserProfileModel, TestError> {
        self.insert_user_with_role(google_id, "admin").await
    }

    pub async fn insert_user_with_role(
        &mut self,
        google_id: &str,
        role: &str,
    ) -> Result<UserProfileModel, TestError> {
        let mock = factory::mock_user_profile_model(google_id, role);

        Ok(entity::user_profile::ActiveModel {
            google_id: ActiveValue::Set(mock.google_id),
            email: ActiveValue::Set(mock.email),
            full_name: ActiveValue::Set(mock.full_name),
            avatar_url: ActiveValue::Set(mock.avatar_url),
            role: ActiveValue::Set(mock.role),
            created_at: ActiveValue::Set(mock.created_at),
            updated_at: ActiveValue::Set(mock.updated_at),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
