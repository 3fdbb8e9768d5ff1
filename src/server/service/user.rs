//! User profile administration.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{Role, UserDto},
    server::{
        data::{
            request::ResourceRequestRepository,
            resource::{submission::ResourceSubmissionRepository, ResourceRepository},
            user::UserProfileRepository,
        },
        error::{domain::DomainError, Error},
        model::db::UserProfileModel,
    },
};

/// Converts a stored profile into its DTO.
///
/// # Returns
/// - `Err(Error::InternalError)` - The stored role is not a known role
pub fn profile_to_dto(user: UserProfileModel) -> Result<UserDto, Error> {
    let role: Role = user.role.parse().map_err(|e| {
        Error::InternalError(format!("Profile ID {} has an invalid role: {}", user.id, e))
    })?;

    Ok(UserDto {
        id: user.id,
        email: user.email,
        full_name: user.full_name,
        avatar_url: user.avatar_url,
        role,
    })
}

/// Service for reading and administering user profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user profile.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Profile found
    /// - `Ok(None)` - No profile with that ID
    /// - `Err(Error)` - Database failure or corrupt role
    pub async fn get(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserProfileRepository::new(self.db);

        user_repo
            .get(user_id)
            .await?
            .map(profile_to_dto)
            .transpose()
    }

    /// Lists every user profile.
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserProfileRepository::new(self.db);

        user_repo
            .list()
            .await?
            .into_iter()
            .map(profile_to_dto)
            .collect()
    }

    /// Changes the role of a user.
    ///
    /// # Arguments
    /// - `acting_admin_id` - Profile ID of the admin making the change
    /// - `user_id` - Profile ID to change
    /// - `role` - The new role
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Updated profile
    /// - `Err(DomainError::SelfModification)` - Admin tried to change their own role
    /// - `Err(DomainError::NotFound)` - No profile with that ID
    pub async fn set_role(
        &self,
        acting_admin_id: i32,
        user_id: i32,
        role: Role,
    ) -> Result<UserDto, Error> {
        if acting_admin_id == user_id {
            return Err(DomainError::SelfModification(acting_admin_id).into());
        }

        let user_repo = UserProfileRepository::new(self.db);

        let user = user_repo
            .set_role(user_id, role)
            .await?
            .ok_or(DomainError::not_found("User", user_id))?;

        tracing::info!(
            admin_id = %acting_admin_id,
            user_id = %user_id,
            role = %role,
            "Changed user role"
        );

        profile_to_dto(user)
    }

    /// Deletes a user along with their requests and submission-tracking rows.
    ///
    /// Resources the user submitted are kept with the submitter cleared.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(DomainError::SelfModification)` - Admin tried to delete themself
    /// - `Err(DomainError::NotFound)` - No profile with that ID
    pub async fn delete(&self, acting_admin_id: i32, user_id: i32) -> Result<(), Error> {
        if acting_admin_id == user_id {
            return Err(DomainError::SelfModification(acting_admin_id).into());
        }

        let txn = self.db.begin().await?;

        let user_repo = UserProfileRepository::new(&txn);
        if user_repo.get(user_id).await?.is_none() {
            return Err(DomainError::not_found("User", user_id).into());
        }

        ResourceRequestRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        ResourceSubmissionRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        ResourceRepository::new(&txn)
            .clear_submitter(user_id)
            .await?;
        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::info!(admin_id = %acting_admin_id, user_id = %user_id, "Deleted user");

        Ok(())
    }
}
