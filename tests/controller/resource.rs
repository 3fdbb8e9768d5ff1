//! Tests for the public resource endpoints.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;
use serde_json::{json, Value};

use crate::util::{send, session_token, TestContextExt};

fn submission(subject_id: i32) -> Value {
    json!({
        "title": "Graph algorithms",
        "description": "Slides and exercises on BFS and DFS",
        "url": "https://example.com/graphs.pdf",
        "subject_id": subject_id,
    })
}

/// A user submission stays hidden until an admin approves it through the legacy route.
#[tokio::test]
async fn submission_visible_after_approval() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let admin = test.user().insert_admin("moderator").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let app = test.app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/resources",
        Some(&session_token(&user)),
        Some(submission(subject.id)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["is_approved"], false);
    assert_eq!(body["category"]["kind"], "subject");
    let id = body["id"].as_i64().unwrap_or_default();

    let (status, body) = send(app.clone(), Method::GET, "/api/resources", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    let uri = format!("/api/resources/{}", id);
    let (status, _) = send(app.clone(), Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let approve = format!("/api/resources/approve/{}", id);
    let (status, _) = send(
        app.clone(),
        Method::PUT,
        &approve,
        Some(&session_token(&user)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        app.clone(),
        Method::PUT,
        &approve,
        Some(&session_token(&admin)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_approved"], true);

    let (status, body) = send(app.clone(), Method::GET, "/api/resources", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], id);

    let (status, body) = send(app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Graph algorithms");

    Ok(())
}

/// Expected: only resources matching both query filters
#[tokio::test]
async fn filters_by_query() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (enit, _, enit_subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let (_, _, insat_subject) = test.catalog().insert_hierarchy("INSAT").await?;
    test.resource()
        .insert_resource("Graph theory", FixtureCategory::Subject(enit_subject.id), true, None)
        .await?;
    test.resource()
        .insert_resource("Graph drawing", FixtureCategory::Subject(insat_subject.id), true, None)
        .await?;
    test.resource()
        .insert_resource("Compilers", FixtureCategory::Subject(enit_subject.id), true, None)
        .await?;

    let uri = format!("/api/resources?search=graph&university_id={}", enit.id);
    let (status, body) = send(test.app(), Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Graph theory");

    Ok(())
}

/// Expected: 400 with a message for every failing field, 401 when anonymous
#[tokio::test]
async fn rejects_invalid_submission() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let app = test.app();

    let payload = json!({
        "title": "",
        "description": "short",
        "url": "ftp://example.com/file",
    });

    let (status, _) = send(
        app.clone(),
        Method::POST,
        "/api/resources",
        None,
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/resources",
        Some(&session_token(&user)),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    for field in ["title", "description", "url", "category"] {
        assert!(body["fields"][field].is_string(), "missing {}", field);
    }

    Ok(())
}

/// Expected: 400 on the category field for a subject that does not exist
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/resources",
        Some(&session_token(&user)),
        Some(submission(404)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["category"], "Selected subject does not exist");

    Ok(())
}

/// Expected: 400 flagging the missing fields instead of a body rejection
#[tokio::test]
async fn partial_submission_reports_missing_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/resources",
        Some(&session_token(&user)),
        Some(json!({ "title": "X", "description": "too short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["fields"]["description"].is_string());
    assert!(body["fields"]["url"].is_string());
    assert!(body["fields"]["category"].is_string());
    assert!(body["fields"].get("title").is_none());

    Ok(())
}
