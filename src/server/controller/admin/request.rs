use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        request::{ResourceRequestDto, UpdateRequestStatusDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::extract::AdminUser},
        error::Error,
        model::app::AppState,
        service::request::RequestService,
    },
};

#[utoipa::path(
    get,
    path = "/api/admin/requests",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "All requests, newest first", body = Vec<ResourceRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_requests(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let requests = RequestService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    put,
    path = "/api/admin/requests/{id}/status",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ResourceRequestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(request_id): Path<i32>,
    Json(payload): Json<UpdateRequestStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let request = RequestService::new(&state.db)
        .update_status(request_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(request)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/requests/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 204, description = "Request deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    RequestService::new(&state.db).delete(request_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
