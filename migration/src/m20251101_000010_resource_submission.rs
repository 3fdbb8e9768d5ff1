use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000008_user_profile::UserProfile, m20251101_000009_resource::Resource,
};

static IDX_RESOURCE_SUBMISSION_USER_ID: &str = "idx_resource_submission_user_id";
static FK_RESOURCE_SUBMISSION_USER_ID: &str = "fk_resource_submission_user_id";
static FK_RESOURCE_SUBMISSION_RESOURCE_ID: &str = "fk_resource_submission_resource_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ResourceSubmission::Id))
                    .col(integer(ResourceSubmission::UserId))
                    .col(integer(ResourceSubmission::ResourceId))
                    .col(timestamp(ResourceSubmission::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESOURCE_SUBMISSION_USER_ID)
                    .table(ResourceSubmission::Table)
                    .col(ResourceSubmission::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_SUBMISSION_USER_ID)
                    .from_tbl(ResourceSubmission::Table)
                    .from_col(ResourceSubmission::UserId)
                    .to_tbl(UserProfile::Table)
                    .to_col(UserProfile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESOURCE_SUBMISSION_RESOURCE_ID)
                    .from_tbl(ResourceSubmission::Table)
                    .from_col(ResourceSubmission::ResourceId)
                    .to_tbl(Resource::Table)
                    .to_col(Resource::Id)
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
                    .name(FK_RESOURCE_SUBMISSION_RESOURCE_ID)
                    .table(ResourceSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESOURCE_SUBMISSION_USER_ID)
                    .table(ResourceSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESOURCE_SUBMISSION_USER_ID)
                    .table(ResourceSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResourceSubmission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ResourceSubmission {
    Table,
    Id,
    UserId,
    ResourceId,
    CreatedAt,
}
