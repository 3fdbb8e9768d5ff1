//! Tests for the sign-in endpoints.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, session_token, TestContextExt};

/// Signing in with Google returns a session token accepted by `/api/auth/user`.
#[tokio::test]
async fn google_login_then_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_google_jwks_endpoint(1)
        .build()
        .await?;
    let app = test.app();

    let credential = auth_factory::sign_google_id_token(&auth_factory::mock_google_claims(
        "google-123",
        "amira@example.com",
        "Amira Ben Salah",
    ))?;

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/auth/google",
        None,
        Some(json!({ "credential": credential })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "user");
    let token = body["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());

    let (status, body) = send(app, Method::GET, "/api/auth/user", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "amira@example.com");
    test.assert_mocks();

    Ok(())
}

/// Expected: 401 for a credential that is not a JWT
#[tokio::test]
async fn google_login_rejects_garbage() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/auth/google",
        None,
        Some(json!({ "credential": "garbage" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expected: 401 without a token, with a tampered token and for a deleted profile
#[tokio::test]
async fn current_user_requires_valid_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let app = test.app();

    let (status, body) = send(app.clone(), Method::GET, "/api/auth/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No token, authorization denied");

    let tampered = format!("{}x", session_token(&user));
    let (status, _) = send(app.clone(), Method::GET, "/api/auth/user", Some(&tampered), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut ghost = user.clone();
    ghost.id = 999;
    let (status, body) = send(
        app,
        Method::GET,
        "/api/auth/user",
        Some(&session_token(&ghost)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Token is not valid");

    Ok(())
}
