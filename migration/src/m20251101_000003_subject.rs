use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_domain::Domain;

static IDX_SUBJECT_DOMAIN_ID: &str = "idx_subject_domain_id";
static FK_SUBJECT_DOMAIN_ID: &str = "fk_subject_domain_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string(Subject::Name))
                    .col(integer(Subject::DomainId))
                    .col(timestamp(Subject::CreatedAt))
                    .col(timestamp(Subject::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBJECT_DOMAIN_ID)
                    .table(Subject::Table)
                    .col(Subject::DomainId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBJECT_DOMAIN_ID)
                    .from_tbl(Subject::Table)
                    .from_col(Subject::DomainId)
                    .to_tbl(Domain::Table)
                    .to_col(Domain::Id)
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
                    .name(FK_SUBJECT_DOMAIN_ID)
                    .table(Subject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_SUBJECT_DOMAIN_ID).table(Subject::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    Table,
    Id,
    Name,
    DomainId,
    CreatedAt,
    UpdatedAt,
}
