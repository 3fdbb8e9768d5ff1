use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(UserProfile::Id))
                    .col(string_uniq(UserProfile::GoogleId))
                    .col(string(UserProfile::Email))
                    .col(string(UserProfile::FullName))
                    .col(string_null(UserProfile::AvatarUrl))
                    .col(string_len(UserProfile::Role, 16))
                    .col(timestamp(UserProfile::CreatedAt))
                    .col(timestamp(UserProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    Id,
    GoogleId,
    Email,
    FullName,
    AvatarUrl,
    Role,
    CreatedAt,
    UpdatedAt,
}
