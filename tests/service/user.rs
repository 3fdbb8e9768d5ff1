//! Tests for UserService administration.

use digibridge::{
    model::user::Role,
    server::{
        error::{domain::DomainError, Error},
        service::user::UserService,
    },
};
use digibridge_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Expected: the role changes and the change is visible through `get`
#[tokio::test]
async fn promotes_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let user = test.user().insert_user("learner").await?;

    let service = UserService::new(&test.db);
    let result = service.set_role(admin.id, user.id, Role::Admin).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().role, Role::Admin);

    let stored = service.get(user.id).await;
    assert!(stored.is_ok());
    assert!(stored.unwrap().is_some_and(|u| u.is_admin()));

    Ok(())
}

/// Expected: Err(SelfModification) for both role change and delete
#[tokio::test]
async fn admin_cannot_modify_self() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;

    let service = UserService::new(&test.db);

    assert!(matches!(
        service.set_role(admin.id, admin.id, Role::User).await,
        Err(Error::DomainError(DomainError::SelfModification(id))) if id == admin.id
    ));
    assert!(matches!(
        service.delete(admin.id, admin.id).await,
        Err(Error::DomainError(DomainError::SelfModification(_)))
    ));

    Ok(())
}

/// Expected: Err(NotFound) for an unknown profile
#[tokio::test]
async fn role_change_of_missing_user_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;

    let result = UserService::new(&test.db)
        .set_role(admin.id, 77, Role::Admin)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound { entity: "User", id: 77 }))
    ));

    Ok(())
}

/// Deleting a user removes their requests and keeps their resources with no submitter.
#[tokio::test]
async fn delete_keeps_resources_and_drops_requests() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_admin("moderator").await?;
    let user = test.user().insert_user("learner").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let resource = test
        .resource()
        .insert_resource(
            "Hash tables",
            FixtureCategory::Subject(subject.id),
            true,
            Some(user.id),
        )
        .await?;
    test.resource()
        .insert_request(user.id, subject.id, "pending")
        .await?;

    let result = UserService::new(&test.db).delete(admin.id, user.id).await;

    assert!(result.is_ok());
    assert!(entity::prelude::UserProfile::find_by_id(user.id)
        .one(&test.db)
        .await?
        .is_none());
    assert_eq!(
        entity::prelude::ResourceRequest::find().count(&test.db).await?,
        0
    );

    let kept = entity::prelude::Resource::find_by_id(resource.id)
        .one(&test.db)
        .await?;
    assert!(kept.is_some_and(|r| r.submitted_by.is_none()));

    Ok(())
}

/// Expected: every profile, including admins
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("learner")
        .with_admin("moderator")
        .build()
        .await?;

    let result = UserService::new(&test.db).list().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);

    Ok(())
}
