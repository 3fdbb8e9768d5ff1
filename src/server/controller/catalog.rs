use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        catalog::{CategoryDto, DomainDto, ExamDto, SkillDto, SubjectDto, UniversityDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static CATALOG_TAG: &str = "catalog";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// List universities
#[utoipa::path(
    get,
    path = "/api/universities",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Universities ordered by name", body = Vec<UniversityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_universities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let universities = CatalogService::new(&state.db).list_universities().await?;

    Ok((StatusCode::OK, Json(universities)))
}

/// List the domains of a university
#[utoipa::path(
    get,
    path = "/api/universities/{id}/domains",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "University ID")),
    responses(
        (status = 200, description = "Domains ordered by name", body = Vec<DomainDto>),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_domains(
    State(state): State<AppState>,
    Path(university_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let domains = CatalogService::new(&state.db)
        .list_domains(university_id)
        .await?;

    Ok((StatusCode::OK, Json(domains)))
}

/// List the subjects of a domain
#[utoipa::path(
    get,
    path = "/api/domains/{id}/subjects",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Domain ID")),
    responses(
        (status = 200, description = "Subjects ordered by name", body = Vec<SubjectDto>),
        (status = 404, description = "Domain not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subjects(
    State(state): State<AppState>,
    Path(domain_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let subjects = CatalogService::new(&state.db).list_subjects(domain_id).await?;

    Ok((StatusCode::OK, Json(subjects)))
}

#[utoipa::path(
    get,
    path = "/api/skill-categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Skill categories ordered by name", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_skill_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let categories = CatalogService::new(&state.db).list_skill_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/skill-categories/{id}/skills",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Skill category ID")),
    responses(
        (status = 200, description = "Skills ordered by name", body = Vec<SkillDto>),
        (status = 404, description = "Skill category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_skills(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let skills = CatalogService::new(&state.db).list_skills(category_id).await?;

    Ok((StatusCode::OK, Json(skills)))
}

#[utoipa::path(
    get,
    path = "/api/exam-categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Exam categories ordered by name", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exam_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let categories = CatalogService::new(&state.db).list_exam_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/exam-categories/{id}/exams",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Exam category ID")),
    responses(
        (status = 200, description = "Exams ordered by name", body = Vec<ExamDto>),
        (status = 404, description = "Exam category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exams(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let exams = CatalogService::new(&state.db).list_exams(category_id).await?;

    Ok((StatusCode::OK, Json(exams)))
}
