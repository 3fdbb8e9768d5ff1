use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        catalog::{DomainDto, SubjectDto, UniversityDto, DomainPayload, NamedEntityDto, SubjectPayload},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::extract::AdminUser},
        error::Error,
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

#[utoipa::path(
    get,
    path = "/api/admin/universities",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Universities ordered by name", body = Vec<UniversityDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_universities(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let universities = CatalogService::new(&state.db).list_universities().await?;

    Ok((StatusCode::OK, Json(universities)))
}

#[utoipa::path(
    post,
    path = "/api/admin/universities",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = NamedEntityDto,
    responses(
        (status = 201, description = "University created", body = UniversityDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_university(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<NamedEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let university = CatalogService::new(&state.db).create_university(payload).await?;

    Ok((StatusCode::CREATED, Json(university)))
}

#[utoipa::path(
    put,
    path = "/api/admin/universities/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "University ID")),
    request_body = NamedEntityDto,
    responses(
        (status = 200, description = "University updated", body = UniversityDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_university(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(university_id): Path<i32>,
    Json(payload): Json<NamedEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let university = CatalogService::new(&state.db)
        .update_university(university_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(university)))
}

/// Delete a university
///
/// Deletes the university's domains, their subjects and every resource and request filed under those subjects.
#[utoipa::path(
    delete,
    path = "/api/admin/universities/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "University ID")),
    responses(
        (status = 204, description = "University deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_university(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(university_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_university(university_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/domains",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Domains with their university, ordered by name", body = Vec<DomainDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_domains(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let domains = CatalogService::new(&state.db).list_all_domains().await?;

    Ok((StatusCode::OK, Json(domains)))
}

#[utoipa::path(
    post,
    path = "/api/admin/domains",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = DomainPayload,
    responses(
        (status = 201, description = "Domain created", body = DomainDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_domain(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<DomainPayload>,
) -> Result<impl IntoResponse, Error> {
    let domain = CatalogService::new(&state.db).create_domain(payload).await?;

    Ok((StatusCode::CREATED, Json(domain)))
}

#[utoipa::path(
    put,
    path = "/api/admin/domains/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Domain ID")),
    request_body = DomainPayload,
    responses(
        (status = 200, description = "Domain updated", body = DomainDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Domain not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_domain(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(domain_id): Path<i32>,
    Json(payload): Json<DomainPayload>,
) -> Result<impl IntoResponse, Error> {
    let domain = CatalogService::new(&state.db)
        .update_domain(domain_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(domain)))
}

/// Delete a domain
///
/// Deletes the domain's subjects and every resource and request filed under them.
#[utoipa::path(
    delete,
    path = "/api/admin/domains/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Domain ID")),
    responses(
        (status = 204, description = "Domain deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Domain not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_domain(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(domain_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_domain(domain_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/subjects",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Subjects with their domain and university, ordered by name", body = Vec<SubjectDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subjects(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let subjects = CatalogService::new(&state.db).list_all_subjects().await?;

    Ok((StatusCode::OK, Json(subjects)))
}

#[utoipa::path(
    post,
    path = "/api/admin/subjects",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = SubjectPayload,
    responses(
        (status = 201, description = "Subject created", body = SubjectDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Domain not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<SubjectPayload>,
) -> Result<impl IntoResponse, Error> {
    let subject = CatalogService::new(&state.db).create_subject(payload).await?;

    Ok((StatusCode::CREATED, Json(subject)))
}

#[utoipa::path(
    put,
    path = "/api/admin/subjects/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Subject ID")),
    request_body = SubjectPayload,
    responses(
        (status = 200, description = "Subject updated", body = SubjectDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subject(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(subject_id): Path<i32>,
    Json(payload): Json<SubjectPayload>,
) -> Result<impl IntoResponse, Error> {
    let subject = CatalogService::new(&state.db)
        .update_subject(subject_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(subject)))
}

/// Delete a subject
///
/// Deletes every resource and request filed under the subject.
#[utoipa::path(
    delete,
    path = "/api/admin/subjects/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(subject_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_subject(subject_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
