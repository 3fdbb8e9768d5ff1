//! Tests for CatalogService skill and exam administration.

use digibridge::{
    model::catalog::{NamedEntityDto, SkillPayload},
    server::{
        error::{domain::DomainError, Error},
        service::catalog::CatalogService,
    },
};
use digibridge_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Deleting a skill category removes its skills and every resource filed under them.
#[tokio::test]
async fn deleting_skill_category_cascades() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("learner").await?;
    let programming = test.catalog().insert_skill_category("Programming").await?;
    let rust = test.catalog().insert_skill(programming.id, "Rust").await?;
    let design = test.catalog().insert_skill_category("Design").await?;
    let figma = test.catalog().insert_skill(design.id, "Figma").await?;

    test.resource()
        .insert_resource("The Book", FixtureCategory::Skill(rust.id), true, Some(user.id))
        .await?;
    test.resource()
        .insert_resource("Prototyping", FixtureCategory::Skill(figma.id), true, None)
        .await?;

    let result = CatalogService::new(&test.db)
        .delete_skill_category(programming.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::SkillCategory::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::Skill::find().count(&test.db).await?, 1);
    let resources = entity::prelude::Resource::find().all(&test.db).await?;
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].skill_id, Some(figma.id));

    Ok(())
}

/// Expected: Err(Duplicate) when renaming onto an existing category name
#[tokio::test]
async fn rejects_duplicate_exam_category_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.catalog().insert_exam_category("National Exams").await?;
    let other = test.catalog().insert_exam_category("Admission Tests").await?;

    let result = CatalogService::new(&test.db)
        .update_exam_category(
            other.id,
            NamedEntityDto {
                name: "National Exams".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::Duplicate {
            entity: "Exam category",
            ..
        }))
    ));

    Ok(())
}

/// Expected: Err(NotFound) for a skill under a missing category
#[tokio::test]
async fn skill_requires_existing_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = CatalogService::new(&test.db)
        .create_skill(SkillPayload {
            name: "Rust".to_string(),
            category_id: 5,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound {
            entity: "Skill category",
            id: 5
        }))
    ));

    Ok(())
}

/// Expected: the created skill is listed under its category with the category name
#[tokio::test]
async fn creates_and_lists_skill() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let category = test.catalog().insert_skill_category("Programming").await?;
    let service = CatalogService::new(&test.db);

    let created = service
        .create_skill(SkillPayload {
            name: "Python".to_string(),
            category_id: category.id,
        })
        .await;
    let listed = service.list_all_skills().await;

    assert!(created.is_ok());
    assert_eq!(created.unwrap().category_name, "Programming");
    assert!(listed.is_ok());
    let listed = listed.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Python");

    Ok(())
}
