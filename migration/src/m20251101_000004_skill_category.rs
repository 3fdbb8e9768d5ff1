use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(SkillCategory::Id))
                    .col(string_uniq(SkillCategory::Name))
                    .col(timestamp(SkillCategory::CreatedAt))
                    .col(timestamp(SkillCategory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SkillCategory {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
