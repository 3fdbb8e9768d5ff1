use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        resource::{NewResourceDto, ResourceDto, UpdateResourceDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::extract::AdminUser},
        error::Error,
        model::app::AppState,
        service::resource::ResourceService,
    },
};

/// List every resource regardless of approval
#[utoipa::path(
    get,
    path = "/api/admin/resources",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "All resources, newest first", body = Vec<ResourceDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_resources(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let resources = ResourceService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(resources)))
}

/// List resources awaiting moderation
#[utoipa::path(
    get,
    path = "/api/admin/resources/pending",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Pending resources, newest first", body = Vec<ResourceDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pending_resources(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let resources = ResourceService::new(&state.db).list_pending().await?;

    Ok((StatusCode::OK, Json(resources)))
}

/// Create a resource, published immediately
#[utoipa::path(
    post,
    path = "/api/admin/resources",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = NewResourceDto,
    responses(
        (status = 201, description = "Resource created", body = ResourceDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resource(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<NewResourceDto>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db)
        .create_as_admin(&admin, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(resource)))
}

/// Replace a resource's title, description, URL and category
#[utoipa::path(
    put,
    path = "/api/admin/resources/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Resource ID")),
    request_body = UpdateResourceDto,
    responses(
        (status = 200, description = "Resource updated", body = ResourceDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_resource(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(resource_id): Path<i32>,
    Json(payload): Json<UpdateResourceDto>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db)
        .update(resource_id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(resource)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/resources/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_resource(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(resource_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ResourceService::new(&state.db).delete(resource_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Approve a pending resource, making it publicly visible
#[utoipa::path(
    put,
    path = "/api/admin/resources/{id}/approve",
    tag = ADMIN_TAG,
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
pub async fn approve_resource(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(resource_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db).approve(resource_id).await?;

    Ok((StatusCode::OK, Json(resource)))
}
