use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthTokenDto, GoogleLoginDto, UserDto},
    },
    server::{
        controller::util::extract::AuthUser, error::Error, model::app::AppState,
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with a Google ID token
///
/// Verifies the credential returned by Google Identity Services, creates a profile on first
/// sign-in and returns a session token to send in the `x-auth-token` header.
#[utoipa::path(
    post,
    path = "/api/auth/google",
    tag = AUTH_TAG,
    request_body = GoogleLoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthTokenDto),
        (status = 401, description = "Google credential could not be verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    Json(payload): Json<GoogleLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens, &state.google);

    let session = auth_service.login_with_google(&payload.credential).await?;

    Ok((StatusCode::OK, Json(session)))
}

/// Get the signed-in user's profile
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(AuthUser(user): AuthUser) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(user)))
}
