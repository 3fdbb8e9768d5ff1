use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        catalog::{CategoryDto, ExamDto, SkillDto, ExamPayload, NamedEntityDto, SkillPayload},
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
    path = "/api/admin/skill-categories",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Skill categories ordered by name", body = Vec<CategoryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_skill_categories(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let skill_categories = CatalogService::new(&state.db).list_skill_categories().await?;

    Ok((StatusCode::OK, Json(skill_categories)))
}

#[utoipa::path(
    post,
    path = "/api/admin/skill-categories",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = NamedEntityDto,
    responses(
        (status = 201, description = "Skill category created", body = CategoryDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_skill_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<NamedEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let skill_category = CatalogService::new(&state.db).create_skill_category(payload).await?;

    Ok((StatusCode::CREATED, Json(skill_category)))
}

#[utoipa::path(
    put,
    path = "/api/admin/skill-categories/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Skill category ID")),
    request_body = NamedEntityDto,
    responses(
        (status = 200, description = "Skill category updated", body = CategoryDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Skill category not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_skill_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(skill_category_id): Path<i32>,
    Json(payload): Json<NamedEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let skill_category = CatalogService::new(&state.db)
        .update_skill_category(skill_category_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(skill_category)))
}

/// Delete a skill category
///
/// Deletes the category's skills and every resource filed under them.
#[utoipa::path(
    delete,
    path = "/api/admin/skill-categories/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Skill category ID")),
    responses(
        (status = 204, description = "Skill category deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Skill category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_skill_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(skill_category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_skill_category(skill_category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/skills",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Skills with their category, ordered by name", body = Vec<SkillDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_skills(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let skills = CatalogService::new(&state.db).list_all_skills().await?;

    Ok((StatusCode::OK, Json(skills)))
}

#[utoipa::path(
    post,
    path = "/api/admin/skills",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = SkillPayload,
    responses(
        (status = 201, description = "Skill created", body = SkillDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Skill category not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_skill(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<SkillPayload>,
) -> Result<impl IntoResponse, Error> {
    let skill = CatalogService::new(&state.db).create_skill(payload).await?;

    Ok((StatusCode::CREATED, Json(skill)))
}

#[utoipa::path(
    put,
    path = "/api/admin/skills/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Skill ID")),
    request_body = SkillPayload,
    responses(
        (status = 200, description = "Skill updated", body = SkillDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Skill not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_skill(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(skill_id): Path<i32>,
    Json(payload): Json<SkillPayload>,
) -> Result<impl IntoResponse, Error> {
    let skill = CatalogService::new(&state.db)
        .update_skill(skill_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(skill)))
}

/// Delete a skill
///
/// Deletes every resource filed under the skill.
#[utoipa::path(
    delete,
    path = "/api/admin/skills/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Skill ID")),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Skill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_skill(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(skill_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_skill(skill_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/exam-categories",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Exam categories ordered by name", body = Vec<CategoryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exam_categories(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let exam_categories = CatalogService::new(&state.db).list_exam_categories().await?;

    Ok((StatusCode::OK, Json(exam_categories)))
}

#[utoipa::path(
    post,
    path = "/api/admin/exam-categories",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = NamedEntityDto,
    responses(
        (status = 201, description = "Exam category created", body = CategoryDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exam_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<NamedEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let exam_category = CatalogService::new(&state.db).create_exam_category(payload).await?;

    Ok((StatusCode::CREATED, Json(exam_category)))
}

#[utoipa::path(
    put,
    path = "/api/admin/exam-categories/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Exam category ID")),
    request_body = NamedEntityDto,
    responses(
        (status = 200, description = "Exam category updated", body = CategoryDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Exam category not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exam_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(exam_category_id): Path<i32>,
    Json(payload): Json<NamedEntityDto>,
) -> Result<impl IntoResponse, Error> {
    let exam_category = CatalogService::new(&state.db)
        .update_exam_category(exam_category_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(exam_category)))
}

/// Delete a exam category
///
/// Deletes the category's exams and every resource filed under them.
#[utoipa::path(
    delete,
    path = "/api/admin/exam-categories/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Exam category ID")),
    responses(
        (status = 204, description = "Exam category deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Exam category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exam_category(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(exam_category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_exam_category(exam_category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/exams",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Exams with their category, ordered by name", body = Vec<ExamDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exams(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let exams = CatalogService::new(&state.db).list_all_exams().await?;

    Ok((StatusCode::OK, Json(exams)))
}

#[utoipa::path(
    post,
    path = "/api/admin/exams",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    request_body = ExamPayload,
    responses(
        (status = 201, description = "Exam created", body = ExamDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Exam category not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exam(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<ExamPayload>,
) -> Result<impl IntoResponse, Error> {
    let exam = CatalogService::new(&state.db).create_exam(payload).await?;

    Ok((StatusCode::CREATED, Json(exam)))
}

#[utoipa::path(
    put,
    path = "/api/admin/exams/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Exam ID")),
    request_body = ExamPayload,
    responses(
        (status = 200, description = "Exam updated", body = ExamDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exam(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(exam_id): Path<i32>,
    Json(payload): Json<ExamPayload>,
) -> Result<impl IntoResponse, Error> {
    let exam = CatalogService::new(&state.db)
        .update_exam(exam_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(exam)))
}

/// Delete a exam
///
/// Deletes every resource filed under the exam.
#[utoipa::path(
    delete,
    path = "/api/admin/exams/{id}",
    tag = ADMIN_TAG,
    security(("x-auth-token" = [])),
    params(("id" = i32, Path, description = "Exam ID")),
    responses(
        (status = 204, description = "Exam deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exam(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(exam_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db)
        .delete_exam(exam_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
