//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI specification. Swagger UI is
//! served at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, admin, util::extract::AUTH_TOKEN_HEADER},
    model::app::AppState,
};

/// Registers the `x-auth-token` header scheme referenced by protected endpoints.
struct AuthTokenScheme;

impl Modify for AuthTokenScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            AUTH_TOKEN_HEADER,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so their methods merge into one route.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state and served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "DigiBridge", description = "DigiBridge educational resources API"),
        modifiers(&AuthTokenScheme),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Google sign-in and session routes"),
            (name = controller::catalog::CATALOG_TAG, description = "Public taxonomy routes"),
            (name = controller::resource::RESOURCE_TAG, description = "Resource browsing and submission"),
            (name = controller::request::REQUEST_TAG, description = "Resource requests"),
            (name = admin::ADMIN_TAG, description = "Admin dashboard routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::health))
        .routes(routes!(controller::auth::google_login))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::catalog::list_universities))
        .routes(routes!(controller::catalog::list_domains))
        .routes(routes!(controller::catalog::list_subjects))
        .routes(routes!(controller::catalog::list_skill_categories))
        .routes(routes!(controller::catalog::list_skills))
        .routes(routes!(controller::catalog::list_exam_categories))
        .routes(routes!(controller::catalog::list_exams))
        .routes(routes!(
            controller::resource::list_resources,
            controller::resource::submit_resource
        ))
        .routes(routes!(controller::resource::get_resource))
        .routes(routes!(controller::resource::approve_resource_legacy))
        .routes(routes!(controller::request::create_request))
        .routes(routes!(controller::request::list_my_requests))
        .routes(routes!(
            admin::resource::list_resources,
            admin::resource::create_resource
        ))
        .routes(routes!(admin::resource::list_pending_resources))
        .routes(routes!(
            admin::resource::update_resource,
            admin::resource::delete_resource
        ))
        .routes(routes!(admin::resource::approve_resource))
        .routes(routes!(
            admin::academic::list_universities,
            admin::academic::create_university
        ))
        .routes(routes!(
            admin::academic::update_university,
            admin::academic::delete_university
        ))
        .routes(routes!(
            admin::academic::list_domains,
            admin::academic::create_domain
        ))
        .routes(routes!(
            admin::academic::update_domain,
            admin::academic::delete_domain
        ))
        .routes(routes!(
            admin::academic::list_subjects,
            admin::academic::create_subject
        ))
        .routes(routes!(
            admin::academic::update_subject,
            admin::academic::delete_subject
        ))
        .routes(routes!(
            admin::taxonomy::list_skill_categories,
            admin::taxonomy::create_skill_category
        ))
        .routes(routes!(
            admin::taxonomy::update_skill_category,
            admin::taxonomy::delete_skill_category
        ))
        .routes(routes!(
            admin::taxonomy::list_skills,
            admin::taxonomy::create_skill
        ))
        .routes(routes!(
            admin::taxonomy::update_skill,
            admin::taxonomy::delete_skill
        ))
        .routes(routes!(
            admin::taxonomy::list_exam_categories,
            admin::taxonomy::create_exam_category
        ))
        .routes(routes!(
            admin::taxonomy::update_exam_category,
            admin::taxonomy::delete_exam_category
        ))
        .routes(routes!(admin::taxonomy::list_exams, admin::taxonomy::create_exam))
        .routes(routes!(
            admin::taxonomy::update_exam,
            admin::taxonomy::delete_exam
        ))
        .routes(routes!(admin::user::list_users))
        .routes(routes!(admin::user::update_user_role))
        .routes(routes!(admin::user::delete_user))
        .routes(routes!(admin::request::list_requests))
        .routes(routes!(admin::request::update_request_status))
        .routes(routes!(admin::request::delete_request))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
