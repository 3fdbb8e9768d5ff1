use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_university::University;

static IDX_DOMAIN_UNIVERSITY_ID: &str = "idx_domain_university_id";
static FK_DOMAIN_UNIVERSITY_ID: &str = "fk_domain_university_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Domain::Table)
                    .if_not_exists()
                    .col(pk_auto(Domain::Id))
                    .col(string(Domain::Name))
                    .col(integer(Domain::UniversityId))
                    .col(timestamp(Domain::CreatedAt))
                    .col(timestamp(Domain::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOMAIN_UNIVERSITY_ID)
                    .table(Domain::Table)
                    .col(Domain::UniversityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOMAIN_UNIVERSITY_ID)
                    .from_tbl(Domain::Table)
                    .from_col(Domain::UniversityId)
                    .to_tbl(University::Table)
                    .to_col(University::Id)
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
                    .name(FK_DOMAIN_UNIVERSITY_ID)
                    .table(Domain::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_DOMAIN_UNIVERSITY_ID).table(Domain::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Domain::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Domain {
    Table,
    Id,
    Name,
    UniversityId,
    CreatedAt,
    UpdatedAt,
}
