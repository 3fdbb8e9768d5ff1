//! Tests for the public CatalogService listings.

use digibridge::server::{
    error::{domain::DomainError, Error},
    service::catalog::CatalogService,
};
use digibridge_test_utils::prelude::*;

/// Expected: domains of the requested university only, ordered by name
#[tokio::test]
async fn lists_domains_of_university() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (university, _, _) = test.catalog().insert_hierarchy("ENIT").await?;
    test.catalog().insert_domain(university.id, "Architecture").await?;
    test.catalog().insert_hierarchy("INSAT").await?;

    let result = CatalogService::new(&test.db).list_domains(university.id).await;

    assert!(result.is_ok());
    let names: Vec<String> = result.unwrap().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Architecture", "Engineering"]);

    Ok(())
}

/// Expected: Err(NotFound) naming the university
#[tokio::test]
async fn domains_of_missing_university_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = CatalogService::new(&test.db).list_domains(42).await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound {
            entity: "University",
            id: 42
        }))
    ));

    Ok(())
}

/// Expected: subjects carry their domain and university names
#[tokio::test]
async fn lists_subjects_with_parent_names() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let (university, domain, subject) = test.catalog().insert_hierarchy("ENIT").await?;

    let result = CatalogService::new(&test.db).list_subjects(domain.id).await;

    assert!(result.is_ok());
    let subjects = result.unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].id, subject.id);
    assert_eq!(subjects[0].domain_name, "Engineering");
    assert_eq!(subjects[0].university_name, university.name);

    Ok(())
}

/// Expected: exams of the category, 404 for an unknown category
#[tokio::test]
async fn lists_exams_of_category() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let category = test.catalog().insert_exam_category("Language Certificates").await?;
    test.catalog().insert_exam(category.id, "TOEFL").await?;
    test.catalog().insert_exam(category.id, "IELTS").await?;

    let service = CatalogService::new(&test.db);
    let exams = service.list_exams(category.id).await;
    let missing = service.list_exams(category.id + 1).await;

    assert!(exams.is_ok());
    let names: Vec<String> = exams.unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["IELTS", "TOEFL"]);
    assert!(matches!(
        missing,
        Err(Error::DomainError(DomainError::NotFound { .. }))
    ));

    Ok(())
}

/// Expected: admin subject listing spans every university
#[tokio::test]
async fn lists_all_subjects_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_hierarchy("ENIT")
        .with_hierarchy("INSAT")
        .build()
        .await?;

    let result = CatalogService::new(&test.db).list_all_subjects().await;

    assert!(result.is_ok());
    let mut universities: Vec<String> = result
        .unwrap()
        .into_iter()
        .map(|s| s.university_name)
        .collect();
    universities.sort();
    assert_eq!(universities, vec!["ENIT", "INSAT"]);

    Ok(())
}
