use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// Header carrying the session token issued at sign-in
pub static AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// The signed-in user, loaded from the database on every request
///
/// # Rejections
/// - `AuthError::MissingToken` (401): No `x-auth-token` header
/// - `AuthError::InvalidToken` (401): Token is malformed, expired or wrongly signed
/// - `AuthError::UserNotInDatabase` (401): Token is valid but the profile was deleted
pub struct AuthUser(pub UserDto);

/// A signed-in user whose current role is admin
///
/// The role is read from the database rather than the token so demotions apply immediately.
///
/// # Rejections
/// - Every [`AuthUser`] rejection
/// - `AuthError::NotAdmin` (403): User is not an admin
pub struct AdminUser(pub UserDto);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = state.tokens.decode(token)?;

        let Some(user) = UserService::new(&state.db).get(claims.user.id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.user.id).into());
        };

        Ok(Self(user))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AuthError::NotAdmin(user.id).into());
        }

        Ok(Self(user))
    }
}
