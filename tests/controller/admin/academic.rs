//! Tests for admin management of the academic hierarchy and taxonomies.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, session_token, TestContextExt};

/// Expected: 201 on create, 200 on rename, 204 on delete
#[tokio::test]
async fn university_lifecycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let token = session_token(&admin);
    let app = test.app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/admin/universities",
        Some(&token),
        Some(json!({ "name": "  ENIT  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "ENIT");
    let uri = format!("/api/admin/universities/{}", body["id"]);

    let (status, body) = send(
        app.clone(),
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "name": "Ecole Nationale d'Ingenieurs de Tunis" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ecole Nationale d'Ingenieurs de Tunis");

    let (status, _) = send(app.clone(), Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(app, Method::GET, "/api/universities", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expected: 409 for a name already in use
#[tokio::test]
async fn duplicate_university_conflicts() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    test.catalog().insert_university("ENIT").await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/admin/universities",
        Some(&session_token(&admin)),
        Some(json!({ "name": "ENIT" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expected: 400 with a message on the name field
#[tokio::test]
async fn blank_name_fails_validation() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/admin/skill-categories",
        Some(&session_token(&admin)),
        Some(json!({ "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["name"].is_string());

    Ok(())
}

/// Expected: the new subject is listed under its domain
#[tokio::test]
async fn creates_subject_under_domain() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let (_, domain, _) = test.catalog().insert_hierarchy("ENIT").await?;
    let app = test.app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/admin/subjects",
        Some(&session_token(&admin)),
        Some(json!({ "name": "Operating Systems", "domain_id": domain.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["domain_name"], "Engineering");
    assert_eq!(body["university_name"], "ENIT");

    let uri = format!("/api/domains/{}/subjects", domain.id);
    let (status, body) = send(app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expected: 404 when deleting an exam that does not exist
#[tokio::test]
async fn deleting_missing_exam_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;

    let (status, _) = send(
        test.app(),
        Method::DELETE,
        "/api/admin/exams/12",
        Some(&session_token(&admin)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
