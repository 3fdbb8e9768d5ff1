//! Tests for admin moderation of resources and requests.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, session_token, TestContextExt};

/// Expected: pending list shrinks after approval through the admin route
#[tokio::test]
async fn approves_pending_resource() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let pending = test
        .resource()
        .insert_resource("Tries", FixtureCategory::Subject(subject.id), false, None)
        .await?;
    test.resource()
        .insert_resource("Heaps", FixtureCategory::Subject(subject.id), true, None)
        .await?;
    let token = session_token(&admin);
    let app = test.app();

    let (status, body) = send(
        app.clone(),
        Method::GET,
        "/api/admin/resources/pending",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], pending.id);

    let uri = format!("/api/admin/resources/{}/approve", pending.id);
    let (status, body) = send(app.clone(), Method::PUT, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_approved"], true);

    let (_, body) = send(
        app.clone(),
        Method::GET,
        "/api/admin/resources/pending",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    let (_, body) = send(app, Method::GET, "/api/admin/resources", Some(&token), None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expected: admin-created resources are published immediately and can be deleted
#[tokio::test]
async fn creates_and_deletes_resource() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let category = test.catalog().insert_exam_category("Language Certificates").await?;
    let exam = test.catalog().insert_exam(category.id, "IELTS").await?;
    let token = session_token(&admin);
    let app = test.app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/admin/resources",
        Some(&token),
        Some(json!({
            "title": "IELTS writing",
            "description": "Band 9 sample essays with comments",
            "url": "https://example.com/ielts",
            "exam_id": exam.id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["is_approved"], true);
    assert_eq!(body["category"]["exam_name"], "IELTS");

    let uri = format!("/api/admin/resources/{}", body["id"]);
    let (status, _) = send(app.clone(), Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: status update stored, then the request can be deleted
#[tokio::test]
async fn manages_requests() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let user = test.user().insert_user("learner").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let request = test
        .resource()
        .insert_request(user.id, subject.id, "pending")
        .await?;
    let token = session_token(&admin);
    let app = test.app();

    let uri = format!("/api/admin/requests/{}/status", request.id);
    let (status, body) = send(
        app.clone(),
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "status": "in-progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in-progress");

    let uri = format!("/api/admin/requests/{}", request.id);
    let (status, _) = send(app.clone(), Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(app, Method::GET, "/api/admin/requests", Some(&token), None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    Ok(())
}
