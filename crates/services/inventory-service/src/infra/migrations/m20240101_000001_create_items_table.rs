//! Migration: Create items table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    .col(ColumnDef::new(Items::Category).string().null())
                    .col(ColumnDef::new(Items::Quantity).integer().not_null().default(0))
                    .col(ColumnDef::new(Items::Location).string().null())
                    .col(ColumnDef::new(Items::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Items::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .col(Items::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Name,
    Category,
    Quantity,
    Location,
    CreatedAt,
    UpdatedAt,
}
