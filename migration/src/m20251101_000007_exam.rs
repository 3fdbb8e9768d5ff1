use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000006_exam_category::ExamCategory;

static IDX_EXAM_CATEGORY_ID: &str = "idx_exam_category_id";
static FK_EXAM_CATEGORY_ID: &str = "fk_exam_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exam::Table)
                    .if_not_exists()
                    .col(pk_auto(Exam::Id))
                    .col(string(Exam::Name))
                    .col(integer(Exam::CategoryId))
                    .col(timestamp(Exam::CreatedAt))
                    .col(timestamp(Exam::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXAM_CATEGORY_ID)
                    .table(Exam::Table)
                    .col(Exam::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXAM_CATEGORY_ID)
                    .from_tbl(Exam::Table)
                    .from_col(Exam::CategoryId)
                    .to_tbl(ExamCategory::Table)
                    .to_col(ExamCategory::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXAM_CATEGORY_ID)
                    .table(Exam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_EXAM_CATEGORY_ID).table(Exam::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Exam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Exam {
    Table,
    Id,
    Name,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}
