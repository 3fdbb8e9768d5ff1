use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        resource::{NewResourceDto, ResourceDto, ResourceFilter},
    },
    server::{
        controller::util::extract::{AdminUser, AuthUser},
        error::Error,
        model::app::AppState,
        service::resource::ResourceService,
    },
};

pub static RESOURCE_TAG: &str = "resource";

/// List approved resources
///
/// All filters are optional and combine with AND. `search` matches title and description
/// case-insensitively.
#[utoipa::path(
    get,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    params(ResourceFilter),
    responses(
        (status = 200, description = "Approved resources, newest first", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_resources(
    State(state): State<AppState>,
    Query(filter): Query<ResourceFilter>,
) -> Result<impl IntoResponse, Error> {
    let resources = ResourceService::new(&state.db).list_public(&filter).await?;

    Ok((StatusCode::OK, Json(resources)))
}

/// Get an approved resource
#[utoipa::path(
    get,
    path = "/api/resources/{id}",
    tag = RESOURCE_TAG,
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "The resource", body = ResourceDto),
        (status = 404, description = "Resource not found or not yet approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db).get_public(resource_id).await?;

    Ok((StatusCode::OK, Json(resource)))
}

/// Submit a resource
///
/// Submissions from regular users wait for moderation, submissions from admins are published
/// immediately.
#[utoipa::path(
    post,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    security(("x-auth-token" = [])),
    request_body = NewResourceDto,
    responses(
        (status = 201, description = "Resource submitted", body = ResourceDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_resource(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<NewResourceDto>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db)
        .submit(&user, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(resource)))
}

/// Approve a pending resource
///
/// Kept for clients built against the first API revision, see
/// `PUT /api/admin/resources/{id}/approve`.
#[utoipa::path(
    put,
    path = "/api/resources/approve/{id}",
    tag = RESOURCE_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource approved", body = ResourceDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_resource_legacy(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(resource_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db).approve(resource_id).await?;

    Ok((StatusCode::OK, Json(resource)))
}
