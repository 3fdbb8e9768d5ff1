use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        request::{NewRequestDto, ResourceRequestDto},
    },
    server::{
        controller::util::extract::AuthUser, error::Error, model::app::AppState,
        service::request::RequestService,
    },
};

pub static REQUEST_TAG: &str = "request";

/// Ask for resources on a subject
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    security(("x-auth-token" = [])),
    request_body = NewRequestDto,
    responses(
        (status = 201, description = "Request created", body = ResourceRequestDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<NewRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let request = RequestService::new(&state.db).create(&user, &payload).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// List the signed-in user's requests
#[utoipa::path(
    get,
    path = "/api/requests/mine",
    tag = REQUEST_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Requests, newest first", body = Vec<ResourceRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_requests(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let requests = RequestService::new(&state.db).list_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(requests)))
}
