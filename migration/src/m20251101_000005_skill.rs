use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_skill_category::SkillCategory;

static IDX_SKILL_CATEGORY_ID: &str = "idx_skill_category_id";
static FK_SKILL_CATEGORY_ID: &str = "fk_skill_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .if_not_exists()
                    .col(pk_auto(Skill::Id))
                    .col(string(Skill::Name))
                    .col(integer(Skill::CategoryId))
                    .col(timestamp(Skill::CreatedAt))
                    .col(timestamp(Skill::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SKILL_CATEGORY_ID)
                    .table(Skill::Table)
                    .col(Skill::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SKILL_CATEGORY_ID)
                    .from_tbl(Skill::Table)
                    .from_col(Skill::CategoryId)
                    .to_tbl(SkillCategory::Table)
                    .to_col(SkillCategory::Id)
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
                    .name(FK_SKILL_CATEGORY_ID)
                    .table(Skill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_SKILL_CATEGORY_ID).table(Skill::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Skill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Skill {
    Table,
    Id,
    Name,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}
