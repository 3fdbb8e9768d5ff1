use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000003_subject::Subject, m20251101_000005_skill::Skill,
    m20251101_000007_exam::Exam, m20251101_000008_user_profile::UserProfile,
};

static IDX_RESOURCE_SUBJECT_ID: &str = "idx_resource_subject_id";
static IDX_RESOURCE_SKILL_ID: &str = "idx_resource_skill_id";
static IDX_RESOURCE_EXAM_ID: &str = "idx_resource_exam_id";
static IDX_RESOURCE_IS_APPROVED: &str = "idx_resource_is_approved";
static FK_RESOURCE_SUBJECT_ID: &str = "fk_resource_subject_id";
static FK_RESOURCE_SKILL_ID: &str = "fk_resource_skill_id";
static FK_RESOURCE_EXAM_ID: &str = "fk_resource_exam_id";
static FK_RESOURCE_SUBMITTED_BY: &str = "fk_resource_submitted_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(string(Resource::Title))
                    .col(text(Resource::Description))
                    .col(string(Resource::Url))
                    .col(integer_null(Resource::SubjectId))
                    .col(integer_null(Resource::SkillId))
                    .col(integer_null(Resource::ExamId))
                    .col(boolean(Resource::IsApproved))
                    .col(integer_null(Resource::SubmittedBy))
                    .col(timestamp(Resource::CreatedAt))
                    .col(timestamp(Resource::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_RESOURCE_SUBJECT_ID, Resource::SubjectId),
            (IDX_RESOURCE_SKILL_ID, Resource::SkillId),
            (IDX_RESOURCE_EXAM_ID, Resource::ExamId),
            (IDX_RESOURCE_IS_APPROVED, Resource::IsApproved),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Resource::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_SUBJECT_ID)
                    .from_tbl(Resource::Table)
                    .from_col(Resource::SubjectId)
                    .to_tbl(Subject::Table)
                    .to_col(Subject::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_SKILL_ID)
                    .from_tbl(Resource::Table)
                    .from_col(Resource::SkillId)
                    .to_tbl(Skill::Table)
                    .to_col(Skill::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_EXAM_ID)
                    .from_tbl(Resource::Table)
                    .from_col(Resource::ExamId)
                    .to_tbl(Exam::Table)
                    .to_col(Exam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_SUBMITTED_BY)
                    .from_tbl(Resource::Table)
                    .from_col(Resource::SubmittedBy)
                    .to_tbl(UserProfile::Table)
                    .to_col(UserProfile::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_RESOURCE_SUBMITTED_BY,
            FK_RESOURCE_EXAM_ID,
            FK_RESOURCE_SKILL_ID,
            FK_RESOURCE_SUBJECT_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Resource::Table)
                        .to_owned(),
                )
                .await?;
        }

        for name in [
            IDX_RESOURCE_IS_APPROVED,
            IDX_RESOURCE_EXAM_ID,
            IDX_RESOURCE_SKILL_ID,
            IDX_RESOURCE_SUBJECT_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Resource::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    Title,
    Description,
    Url,
    SubjectId,
    SkillId,
    ExamId,
    IsApproved,
    SubmittedBy,
    CreatedAt,
    UpdatedAt,
}
