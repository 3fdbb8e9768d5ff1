//! Tests for CatalogService university, domain and subject administration.

use digibridge::{
    model::catalog::{DomainPayload, NamedEntityDto, SubjectPayload},
    server::{
        error::{domain::DomainError, Error},
        service::catalog::CatalogService,
    },
};
use digibridge_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn named(name: &str) -> NamedEntityDto {
    NamedEntityDto {
        name: name.to_string(),
    }
}

/// Expected: Ok with the trimmed name
#[tokio::test]
async fn creates_university_with_trimmed_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = CatalogService::new(&test.db)
        .create_university(named("  Université de Sousse "))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().name, "Université de Sousse");

    Ok(())
}

/// Expected: Err(Validation) on the name field
#[tokio::test]
async fn rejects_blank_university_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = CatalogService::new(&test.db)
        .create_university(named("   "))
        .await;

    match result {
        Err(Error::DomainError(DomainError::Validation(errors))) => {
            assert!(errors.get("name").is_some())
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Expected: Err(Duplicate) when the name is already taken
#[tokio::test]
async fn rejects_duplicate_university_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.catalog().insert_university("ENIT").await?;

    let result = CatalogService::new(&test.db)
        .create_university(named("ENIT"))
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Duplicate {
            entity: "University",
            ..
        }))
    ));

    Ok(())
}

/// Expected: Err(NotFound) for the missing university, nothing inserted
#[tokio::test]
async fn domain_requires_existing_university() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = CatalogService::new(&test.db)
        .create_domain(DomainPayload {
            name: "Engineering".to_string(),
            university_id: 7,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound {
            entity: "University",
            id: 7
        }))
    ));
    assert_eq!(entity::prelude::Domain::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expected: subject moved to the new domain with refreshed parent names
#[tokio::test]
async fn updates_subject_domain() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (university, _, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let physics = test.catalog().insert_domain(university.id, "Physics").await?;

    let result = CatalogService::new(&test.db)
        .update_subject(
            subject.id,
            SubjectPayload {
                name: "Optics".to_string(),
                domain_id: physics.id,
            },
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.name, "Optics");
    assert_eq!(updated.domain_id, physics.id);
    assert_eq!(updated.domain_name, "Physics");

    Ok(())
}

/// Deleting a university removes its domains, their subjects and everything filed under
/// those subjects, leaving other universities untouched.
#[tokio::test]
async fn deleting_university_cascades() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let (university, domain, subject) = test.catalog().insert_hierarchy("ENIT").await?;
    let second_subject = test.catalog().insert_subject(domain.id, "Compilers").await?;
    let (_, _, other_subject) = test.catalog().insert_hierarchy("INSAT").await?;

    test.resource()
        .insert_resource("Trees", FixtureCategory::Subject(subject.id), true, None)
        .await?;
    test.resource()
        .insert_resource("Parsing", FixtureCategory::Subject(second_subject.id), false, None)
        .await?;
    let kept = test
        .resource()
        .insert_resource("Graphs", FixtureCategory::Subject(other_subject.id), true, None)
        .await?;
    test.resource()
        .insert_request(user.id, subject.id, "pending")
        .await?;

    let result = CatalogService::new(&test.db)
        .delete_university(university.id)
        .await;

    assert!(result.is_ok());
    assert!(entity::prelude::University::find_by_id(university.id)
        .one(&test.db)
        .await?
        .is_none());
    assert!(entity::prelude::Domain::find_by_id(domain.id)
        .one(&test.db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Subject::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::ResourceRequest::find().count(&test.db).await?, 0);

    let resources = entity::prelude::Resource::find().all(&test.db).await?;
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].id, kept.id);

    Ok(())
}

/// An admin deleting a domain with two subjects leaves no subjects for that domain.
#[tokio::test]
async fn deleting_domain_removes_its_subjects() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (_, domain, _) = test.catalog().insert_hierarchy("ENIT").await?;
    test.catalog().insert_subject(domain.id, "Compilers").await?;

    let service = CatalogService::new(&test.db);
    let result = service.delete_domain(domain.id).await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::Subject::find().count(&test.db).await?, 0);
    assert!(matches!(
        service.list_subjects(domain.id).await,
        Err(Error::DomainError(DomainError::NotFound { entity: "Domain", .. }))
    ));

    Ok(())
}

/// Expected: Err(NotFound) and no transaction left open
#[tokio::test]
async fn deleting_missing_subject_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = CatalogService::new(&test.db);

    let result = service.delete_subject(3).await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound { entity: "Subject", id: 3 }))
    ));
    // The connection is usable again once the failed transaction was dropped
    assert!(service.list_universities().await.is_ok());

    Ok(())
}
