//! Tests for the learner request endpoints.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, session_token, TestContextExt};

/// Expected: 201 on create, then the request shows up under `/api/requests/mine`
#[tokio::test]
async fn creates_and_lists_own_requests() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let other = test.user().insert_user("other").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    test.resource()
        .insert_request(other.id, subject.id, "pending")
        .await?;
    let app = test.app();
    let token = session_token(&user);

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/requests",
        Some(&token),
        Some(json!({
            "title": "Solved exercises",
            "description": "Exercises with solutions for the final exam",
            "subject_id": subject.id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["subject_name"], "Data Structures");

    let (status, body) = send(app, Method::GET, "/api/requests/mine", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Solved exercises");

    Ok(())
}

/// Expected: 400 listing the description and subject fields
#[tokio::test]
async fn rejects_invalid_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/requests",
        Some(&session_token(&user)),
        Some(json!({ "title": "Notes", "description": "too short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["description"].is_string());
    assert!(body["fields"]["subject_id"].is_string());
    assert!(body["fields"].get("title").is_none());

    Ok(())
}

/// Expected: 401 for anonymous callers
#[tokio::test]
async fn requests_require_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, _) = send(test.app(), Method::GET, "/api/requests/mine", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expected: 400 on every field when the body is an empty object
#[tokio::test]
async fn empty_request_body_reports_every_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/requests",
        Some(&session_token(&user)),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["title", "description", "subject_id"] {
        assert!(body["fields"][field].is_string(), "missing {}", field);
    }

    Ok(())
}
