//! Tests for the public catalog endpoints.

use axum::http::{Method, StatusCode};
use digibridge_test_utils::prelude::*;

use crate::util::{send, TestContextExt};

#[tokio::test]
async fn health_reports_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send(test.app(), Method::GET, "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    Ok(())
}

/// Expected: 200 with the domains of the university
#[tokio::test]
async fn lists_domains_of_university() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (university, domain, _) = test.catalog().insert_hierarchy("ENIT").await?;

    let uri = format!("/api/universities/{}/domains", university.id);
    let (status, body) = send(test.app(), Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], domain.id);
    assert_eq!(body[0]["university_name"], "ENIT");

    Ok(())
}

/// Expected: 404 with an error message
#[tokio::test]
async fn domains_of_missing_university_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) = send(
        test.app(),
        Method::GET,
        "/api/universities/42/domains",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "University not found");

    Ok(())
}

/// Expected: 200 with skills of the category
#[tokio::test]
async fn lists_skills_of_category() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let category = test.catalog().insert_skill_category("Programming").await?;
    test.catalog().insert_skill(category.id, "Rust").await?;
    test.catalog().insert_skill(category.id, "Python").await?;

    let uri = format!("/api/skill-categories/{}/skills", category.id);
    let (status, body) = send(test.app(), Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Python");
    assert_eq!(body[1]["name"], "Rust");

    Ok(())
}
