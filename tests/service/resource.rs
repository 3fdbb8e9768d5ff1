//! Tests for ResourceService.

use digibridge::{
    model::{
        resource::{NewResourceDto, ResourceCategory, ResourceFilter},
        user::UserDto,
    },
    server::{
        error::{domain::DomainError, Error},
        service::{resource::ResourceService, user::profile_to_dto},
    },
};
use digibridge_test_utils::{model::UserProfileModel, prelude::*};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

fn dto(profile: UserProfileModel) -> UserDto {
    profile_to_dto(profile).expect("fixture roles are valid")
}

fn draft_for_subject(subject_id: i32) -> NewResourceDto {
    NewResourceDto {
        title: "Binary trees".to_string(),
        description: "Worked examples on traversal and balancing".to_string(),
        url: "https://example.com/trees.pdf".to_string(),
        subject_id: Some(subject_id),
        ..Default::default()
    }
}

/// A user's submission waits for moderation and is tracked against the submitter.
#[tokio::test]
async fn user_submission_is_pending_and_tracked() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = dto(test.user().insert_user("learner").await?);
    let (university, domain, subject) = test.catalog().insert_hierarchy("ENIT").await?;

    let result = ResourceService::new(&test.db)
        .submit(&user, &draft_for_subject(subject.id))
        .await;

    assert!(result.is_ok());
    let resource = result.unwrap();
    assert!(!resource.is_approved);
    assert_eq!(resource.submitted_by, Some(user.id));
    assert_eq!(
        resource.category,
        ResourceCategory::Subject {
            subject_id: subject.id,
            subject_name: subject.name,
            domain_id: domain.id,
            domain_name: domain.name,
            university_id: university.id,
            university_name: university.name,
        }
    );

    let tracked = entity::prelude::ResourceSubmission::find()
        .filter(entity::resource_submission::Column::UserId.eq(user.id))
        .count(&test.db)
        .await?;
    assert_eq!(tracked, 1);

    Ok(())
}

/// Expected: an admin's submission is published immediately
#[tokio::test]
async fn admin_submission_is_approved() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = dto(test.user().insert_admin("moderator").await?);
    let category = test.catalog().insert_exam_category("Language Certificates").await?;
    let exam = test.catalog().insert_exam(category.id, "TOEFL").await?;

    let draft = NewResourceDto {
        title: "TOEFL listening".to_string(),
        description: "Listening practice with transcripts".to_string(),
        url: "https://example.com/toefl".to_string(),
        exam_id: Some(exam.id),
        ..Default::default()
    };
    let result = ResourceService::new(&test.db).submit(&admin, &draft).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_approved);

    Ok(())
}

/// Expected: Err(Validation) listing every failing field, nothing stored
#[tokio::test]
async fn rejects_invalid_draft() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = dto(test.user().insert_user("learner").await?);

    let draft = NewResourceDto {
        title: " ".to_string(),
        description: "too short".to_string(),
        url: "not a url".to_string(),
        subject_id: Some(1),
        skill_id: Some(1),
        ..Default::default()
    };
    let result = ResourceService::new(&test.db).submit(&user, &draft).await;

    match result {
        Err(Error::DomainError(DomainError::Validation(errors))) => {
            for field in ["title", "description", "url", "category"] {
                assert!(errors.get(field).is_some(), "missing error for {}", field);
            }
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(entity::prelude::Resource::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expected: Err(InvalidCategory) for a skill that does not exist
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = dto(test.user().insert_user("learner").await?);

    let draft = NewResourceDto {
        skill_id: Some(99),
        subject_id: None,
        ..draft_for_subject(0)
    };
    let result = ResourceService::new(&test.db).submit(&user, &draft).await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidCategory {
            category: "skill",
            id: 99,
            ..
        }))
    ));

    Ok(())
}

/// Approving a resource moves it from the pending list to the public listing.
#[tokio::test]
async fn approval_publishes_resource() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let pending = test
        .resource()
        .insert_resource("Heaps", FixtureCategory::Subject(subject.id), false, None)
        .await?;

    let service = ResourceService::new(&test.db);
    assert!(service.list_public(&ResourceFilter::default()).await.unwrap().is_empty());
    assert!(matches!(
        service.get_public(pending.id).await,
        Err(Error::DomainError(DomainError::NotFound { .. }))
    ));

    let approved = service.approve(pending.id).await;

    assert!(approved.is_ok());
    assert!(approved.unwrap().is_approved);
    assert!(service.list_pending().await.unwrap().is_empty());
    let public = service.list_public(&ResourceFilter::default()).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, pending.id);

    Ok(())
}

/// Expected: search is case-insensitive and combines with the university filter
#[tokio::test]
async fn filters_public_listing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (enit, _, enit_subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let (_, _, insat_subject) = test.catalog().insert_hierarchy("INSAT").await?;
    let programming = test.catalog().insert_skill_category("Programming").await?;
    let rust = test.catalog().insert_skill(programming.id, "Rust").await?;

    for (title, category) in [
        ("Graph algorithms", FixtureCategory::Subject(enit_subject.id)),
        ("Sorting algorithms", FixtureCategory::Subject(insat_subject.id)),
        ("Rust ownership", FixtureCategory::Skill(rust.id)),
    ] {
        test.resource()
            .insert_resource(title, category, true, None)
            .await?;
    }

    let service = ResourceService::new(&test.db);

    let by_search = service
        .list_public(&ResourceFilter {
            search: Some("ALGORITHMS".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_search.len(), 2);

    let by_university = service
        .list_public(&ResourceFilter {
            search: Some("algorithms".to_string()),
            university_id: Some(enit.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_university.len(), 1);
    assert_eq!(by_university[0].title, "Graph algorithms");

    let by_skill = service
        .list_public(&ResourceFilter {
            skill_id: Some(rust.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_skill.len(), 1);
    assert_eq!(by_skill[0].title, "Rust ownership");

    Ok(())
}

/// Expected: the resource moves to the new category
#[tokio::test]
async fn updates_resource_category() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let programming = test.catalog().insert_skill_category("Programming").await?;
    let rust = test.catalog().insert_skill(programming.id, "Rust").await?;
    let resource = test
        .resource()
        .insert_resource("Ownership", FixtureCategory::Subject(subject.id), true, None)
        .await?;

    let draft = NewResourceDto {
        subject_id: None,
        skill_id: Some(rust.id),
        ..draft_for_subject(subject.id)
    };
    let result = ResourceService::new(&test.db).update(resource.id, &draft).await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.title, "Binary trees");
    assert_eq!(updated.category.skill_id(), Some(rust.id));
    assert_eq!(updated.category.subject_id(), None);

    Ok(())
}

/// Expected: resource and its tracking rows removed
#[tokio::test]
async fn deletes_resource_with_tracking_rows() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = dto(test.user().insert_user("learner").await?);
    let (_, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;

    let service = ResourceService::new(&test.db);
    let resource = service
        .submit(&user, &draft_for_subject(subject.id))
        .await
        .unwrap();

    let result = service.delete(resource.id).await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::Resource::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::ResourceSubmission::find().count(&test.db).await?, 0);
    assert!(matches!(
        service.delete(resource.id).await,
        Err(Error::DomainError(DomainError::NotFound { .. }))
    ));

    Ok(())
}
