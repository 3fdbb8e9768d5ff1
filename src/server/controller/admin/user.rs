use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateRoleDto, UserDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::extract::AdminUser},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "All user profiles", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Change a user's role
///
/// Admins cannot change their own role.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Attempted to change own role", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .set_role(admin.id, user_id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user with their requests
///
/// Resources the user submitted are kept. Admins cannot delete themselves.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Attempted to delete own account", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete(admin.id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
