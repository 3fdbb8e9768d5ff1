//! Tests for admin route authorization.

use axum::http::{Method, StatusCode};
use digibridge::{model::user::Role, server::service::user::UserService};
use digibridge_test_utils::prelude::*;

use crate::util::{send, session_token, TestContextExt};

/// Expected: 401 anonymous, 403 for a user, 200 for an admin
#[tokio::test]
async fn admin_routes_require_admin_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let admin = test.user().insert_admin("moderator").await?;
    let app = test.app();

    let (status, _) = send(app.clone(), Method::GET, "/api/admin/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        app.clone(),
        Method::GET,
        "/api/admin/users",
        Some(&session_token(&user)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Admin access required");

    let (status, body) = send(
        app,
        Method::GET,
        "/api/admin/users",
        Some(&session_token(&admin)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// The admin role is read from the database, not from the token.
#[tokio::test]
async fn demoted_admin_loses_access() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let token = session_token(&admin);

    let other = test.user().insert_admin("other-moderator").await?;
    let demoted = UserService::new(&test.db)
        .set_role(other.id, admin.id, Role::User)
        .await;
    assert!(demoted.is_ok());

    let (status, _) = send(
        test.app(),
        Method::GET,
        "/api/admin/resources/pending",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}
