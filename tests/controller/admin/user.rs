//! Tests for admin user management.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, session_token, TestContextExt};

/// Expected: 200 with the promoted profile
#[tokio::test]
async fn promotes_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let user = test.user().insert_user("learner").await?;

    let uri = format!("/api/admin/users/{}/role", user.id);
    let (status, body) = send(
        test.app(),
        Method::PUT,
        &uri,
        Some(&session_token(&admin)),
        Some(json!({ "role": "admin" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    Ok(())
}

/// Expected: 400 when an admin targets their own account
#[tokio::test]
async fn refuses_self_modification() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let token = session_token(&admin);
    let app = test.app();

    let uri = format!("/api/admin/users/{}/role", admin.id);
    let (status, _) = send(
        app.clone(),
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "role": "user" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/api/admin/users/{}", admin.id);
    let (status, _) = send(app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 204, then the deleted user's token is rejected
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let user = test.user().insert_user("learner").await?;
    let app = test.app();

    let uri = format!("/api/admin/users/{}", user.id);
    let (status, _) = send(
        app.clone(),
        Method::DELETE,
        &uri,
        Some(&session_token(&admin)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        app,
        Method::GET,
        "/api/auth/user",
        Some(&session_token(&user)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}
