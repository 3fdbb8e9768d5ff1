pub use sea_orm_migration::prelude::*;

mod m20251101_000001_university;
mod m20251101_000002_domain;
mod m20251101_000003_subject;
mod m20251101_000004_skill_category;
mod m20251101_000005_skill;
mod m20251101_000006_exam_category;
mod m20251101_000007_exam;
mod m20251101_000008_user_profile;
mod m20251101_000009_resource;
mod m20251101_000010_resource_submission;
mod m20251101_000011_resource_request;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_university::Migration),
            Box::new(m20251101_000002_domain::Migration),
            Box::new(m20251101_000003_subject::Migration),
            Box::new(m20251101_000004_skill_category::Migration),
            Box::new(m20251101_000005_skill::Migration),
            Box::new(m20251101_000006_exam_category::Migration),
            Box::new(m20251101_000007_exam::Migration),
            Box::new(m20251101_000008_user_profile::Migration),
            Box::new(m20251101_000009_resource::Migration),
            Box::new(m20251101_000010_resource_submission::Migration),
            Box::new(m20251101_000011_resource_request::Migration),
        ]
    }
}
