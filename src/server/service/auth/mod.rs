//! Authentication services.
//!
//! Users sign in with Google: the browser obtains a Google ID token, the server verifies it
//! with [`GoogleVerifier`](google::GoogleVerifier), links it to a profile and answers with
//! a DigiBridge session token issued by [`TokenService`](token::TokenService).

pub mod google;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::AuthTokenDto,
    server::{
        data::user::UserProfileRepository,
        error::Error,
        service::{
            auth::{google::GoogleVerifier, token::TokenService},
            user::profile_to_dto,
        },
    },
};

/// Service for signing users in.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    google: &'a GoogleVerifier,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        google: &'a GoogleVerifier,
    ) -> Self {
        Self { db, tokens, google }
    }

    /// Signs a user in with a Google ID token.
    ///
    /// Verifies the credential, then gets or creates the profile linked to the Google account.
    /// New profiles get the `user` role; existing profiles have their email, name and avatar
    /// refreshed but keep their role.
    ///
    /// # Arguments
    /// - `credential` - Google ID token from Google Identity Services
    ///
    /// # Returns
    /// - `Ok(AuthTokenDto)` - Session token and the signed-in profile
    /// - `Err(Error::AuthError)` - The credential could not be verified
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login_with_google(&self, credential: &str) -> Result<AuthTokenDto, Error> {
        let profile = self.google.verify(credential).await?;

        let user_repo = UserProfileRepository::new(self.db);

        let user = match user_repo.find_by_google_id(&profile.google_id).await? {
            Some(existing) => user_repo.refresh(existing, &profile).await?,
            None => {
                let user = user_repo.create(&profile).await?;
                tracing::info!(user_id = %user.id, "Created profile for new Google account");
                user
            }
        };

        let user = profile_to_dto(user)?;
        let token = self.tokens.issue(user.id, user.role)?;

        Ok(AuthTokenDto { token, user })
    }
}
