//! Inventory Service Library
//!
//! Data access for the inventory application: login, items, employees,
//! history, tasks and settings. Callers construct a [`DataAccess`] facade
//! over an explicit database connection and use it through the
//! [`InventoryService`] trait.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

pub use crate::config::InventoryServiceConfig;
pub use crate::infra::Database;
pub use crate::service::{DataAccess, InventoryService};

/// Connect to the configured database, apply migrations, and build the facade.
pub async fn connect(config: &InventoryServiceConfig) -> Result<DataAccess, sea_orm::DbErr> {
    let db = Database::connect(&config.database).await?;
    Ok(DataAccess::from_connection(db.get_connection()))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = InventoryServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
