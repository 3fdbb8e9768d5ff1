//! Tests for RequestService.

use digibridge::{
    model::request::{NewRequestDto, RequestStatus},
    server::{
        error::{domain::DomainError, Error},
        service::{request::RequestService, user::profile_to_dto},
    },
};
use digibridge_test_utils::prelude::*;

/// Expected: stored as pending with the subject name attached
#[tokio::test]
async fn creates_pending_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = profile_to_dto(test.user().insert_user("learner").await?).unwrap();
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;

    let draft = NewRequestDto {
        title: "  Past exam papers  ".to_string(),
        description: "Looking for corrected exams from the last three years".to_string(),
        subject_id: Some(subject.id),
    };
    let result = RequestService::new(&test.db).create(&user, &draft).await;

    assert!(result.is_ok());
    let request = result.unwrap();
    assert_eq!(request.title, "Past exam papers");
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.subject_name, "Data Structures");
    assert_eq!(request.user_id, user.id);

    Ok(())
}

/// Expected: Err(Validation) on `subject_id` when the subject does not exist
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = profile_to_dto(test.user().insert_user("learner").await?).unwrap();

    let draft = NewRequestDto {
        title: "Past exam papers".to_string(),
        description: "Looking for corrected exams from the last three years".to_string(),
        subject_id: Some(404),
    };
    let result = RequestService::new(&test.db).create(&user, &draft).await;

    match result {
        Err(Error::DomainError(DomainError::Validation(errors))) => {
            assert!(errors.get("subject_id").is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Expected: a user only sees their own requests while admins see every request
#[tokio::test]
async fn lists_requests_per_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    test.resource()
        .insert_request(alice.id, subject.id, "pending")
        .await?;
    test.resource()
        .insert_request(bob.id, subject.id, "completed")
        .await?;

    let service = RequestService::new(&test.db);

    let mine = service.list_for_user(alice.id).await;
    assert!(mine.is_ok());
    let mine = mine.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, alice.id);

    let all = service.list_all().await;
    assert!(all.is_ok());
    assert_eq!(all.unwrap().len(), 2);

    Ok(())
}

/// Expected: status changes are stored, missing requests are NotFound
#[tokio::test]
async fn updates_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let request = test
        .resource()
        .insert_request(user.id, subject.id, "pending")
        .await?;

    let service = RequestService::new(&test.db);

    let result = service
        .update_status(request.id, RequestStatus::InProgress)
        .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().status, RequestStatus::InProgress);

    let missing = service.update_status(999, RequestStatus::Completed).await;
    assert!(matches!(
        missing,
        Err(Error::DomainError(DomainError::NotFound {
            entity: "Request",
            id: 999
        }))
    ));

    Ok(())
}

/// Expected: Ok on first delete, NotFound on the second
#[tokio::test]
async fn deletes_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let request = test
        .resource()
        .insert_request(user.id, subject.id, "rejected")
        .await?;

    let service = RequestService::new(&test.db);

    assert!(service.delete(request.id).await.is_ok());
    assert!(matches!(
        service.delete(request.id).await,
        Err(Error::DomainError(DomainError::NotFound { .. }))
    ));

    Ok(())
}
