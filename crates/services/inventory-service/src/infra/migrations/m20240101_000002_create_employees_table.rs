//! Migration: Create employees table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().not_null())
                    .col(ColumnDef::new(Employees::Role).string().not_null())
                    .col(ColumnDef::new(Employees::PinHash).string_len(64).not_null())
                    .col(ColumnDef::new(Employees::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Employees::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Login filters on email; duplicates are allowed and rejected at login
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_email")
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Email,
    Role,
    PinHash,
    CreatedAt,
    UpdatedAt,
}
