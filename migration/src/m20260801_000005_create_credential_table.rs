use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Credential::Table)
                    .if_not_exists()
                    .col(pk_auto(Credential::Id))
                    .col(string(Credential::Email))
                    .col(string(Credential::PasswordSalt))
                    .col(string(Credential::PasswordHash))
                    .col(timestamp_with_time_zone(Credential::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Credential::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Credential {
    Table,
    Id,
    Email,
    PasswordSalt,
    PasswordHash,
    CreatedAt,
}
