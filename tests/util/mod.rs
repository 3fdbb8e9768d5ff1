//! Helpers for building application state and driving the router in integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use digibridge::{
    model::user::Role,
    server::{
        model::app::AppState,
        router,
        service::auth::{google::GoogleVerifier, token::TokenService},
    },
};
use digibridge_test_utils::{prelude::*, model::UserProfileModel};
use serde_json::Value;
use tower::ServiceExt;

/// Extension trait for TestContext to create the application state
pub trait TestContextExt {
    fn to_app_state(&self) -> AppState;
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            tokens: TokenService::new(TEST_JWT_SECRET, 24),
            google: GoogleVerifier::new(TEST_GOOGLE_CLIENT_ID, self.jwks_url()),
        }
    }

    fn app(&self) -> Router {
        router::routes().with_state(self.to_app_state())
    }
}

/// Issues a session token for a fixture profile
pub fn session_token(user: &UserProfileModel) -> String {
    let role = if user.role == "admin" {
        Role::Admin
    } else {
        Role::User
    };

    TokenService::new(TEST_JWT_SECRET, 24)
        .issue(user.id, role)
        .expect("fixture session token should sign")
}

/// Sends one request through the router and returns the status with the JSON body, if any
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        request = request.header("x-auth-token", token);
    }

    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("request should build");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
