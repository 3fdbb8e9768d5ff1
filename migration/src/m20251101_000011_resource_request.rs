use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000003_subject::Subject, m20251101_000008_user_profile::UserProfile};

static IDX_RESOURCE_REQUEST_USER_ID: &str = "idx_resource_request_user_id";
static FK_RESOURCE_REQUEST_USER_ID: &str = "fk_resource_request_user_id";
static FK_RESOURCE_REQUEST_SUBJECT_ID: &str = "fk_resource_request_subject_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ResourceRequest::Id))
                    .col(integer(ResourceRequest::UserId))
                    .col(integer(ResourceRequest::SubjectId))
                    .col(string(ResourceRequest::Title))
                    .col(text(ResourceRequest::Description))
                    .col(string_len(ResourceRequest::Status, 16))
                    .col(timestamp(ResourceRequest::CreatedAt))
                    .col(timestamp(ResourceRequest::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESOURCE_REQUEST_USER_ID)
                    .table(ResourceRequest::Table)
                    .col(ResourceRequest::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_REQUEST_USER_ID)
                    .from_tbl(ResourceRequest::Table)
                    .from_col(ResourceRequest::UserId)
                    .to_tbl(UserProfile::Table)
                    .to_col(UserProfile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_REQUEST_SUBJECT_ID)
                    .from_tbl(ResourceRequest::Table)
                    .from_col(ResourceRequest::SubjectId)
                    .to_tbl(Subject::Table)
                    .to_col(Subject::Id)
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
                    .name(FK_RESOURCE_REQUEST_SUBJECT_ID)
                    .table(ResourceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESOURCE_REQUEST_USER_ID)
                    .table(ResourceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESOURCE_REQUEST_USER_ID)
                    .table(ResourceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResourceRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ResourceRequest {
    Table,
    Id,
    UserId,
    SubjectId,
    Title,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}
