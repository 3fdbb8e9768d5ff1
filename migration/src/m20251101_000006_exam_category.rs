use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExamCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ExamCategory::Id))
                    .col(string_uniq(ExamCategory::Name))
                    .col(timestamp(ExamCategory::CreatedAt))
                    .col(timestamp(ExamCategory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExamCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ExamCategory {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
