//! Migration: Create history table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(History::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(History::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(History::ItemId).integer().null())
                    .col(ColumnDef::new(History::EmployeeId).integer().null())
                    .col(ColumnDef::new(History::Action).string().not_null())
                    .col(ColumnDef::new(History::QuantityChange).integer().null())
                    .col(ColumnDef::new(History::Notes).text().null())
                    .col(ColumnDef::new(History::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(History::UpdatedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_history_item_id")
                    .table(History::Table)
                    .col(History::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_history_employee_id")
                    .table(History::Table)
                    .col(History::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(History::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum History {
    Table,
    Id,
    ItemId,
    EmployeeId,
    Action,
    QuantityChange,
    Notes,
    CreatedAt,
    UpdatedAt,
}
