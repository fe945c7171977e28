//! Inventory Service - operator CLI for the inventory database.

use clap::{Parser, Subcommand};
use common::AppError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_service_lib::{InventoryService, InventoryServiceConfig, MigrateAction};

#[derive(Parser)]
#[command(name = "inventory-service")]
#[command(about = "Inventory data access administration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Read or change the low-stock threshold
    Threshold {
        #[command(subcommand)]
        action: ThresholdCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum ThresholdCommands {
    /// Print the current threshold as JSON
    Get,
    /// Set the threshold
    Set { value: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            inventory_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Threshold { action } => {
            let config = InventoryServiceConfig::from_env();
            let service = inventory_service_lib::connect(&config).await?;

            let setting = match action {
                ThresholdCommands::Get => service.get_low_stock_threshold().await,
                ThresholdCommands::Set { value } => service.update_low_stock_threshold(value).await.map(Some),
            };

            match setting {
                Ok(setting) => println!("{}", serde_json::to_string_pretty(&setting)?),
                Err(e) => {
                    eprintln!("{}", error_line(&e));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// One-line operator message for a failed facade call
fn error_line(err: &AppError) -> String {
    format!("error [{}]: {}", err.code(), err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_for_validation() {
        let err = AppError::validation("Low stock threshold must not be negative");
        assert_eq!(
            error_line(&err),
            "error [VALIDATION_ERROR]: Low stock threshold must not be negative"
        );
    }

    #[test]
    fn test_error_line_hides_backend_detail() {
        let err: AppError = sea_orm::DbErr::Custom("connection refused at 10.0.0.7".into()).into();
        let line = error_line(&err);
        assert_eq!(line, "error [BACKEND_ERROR]: A database error occurred");
        assert!(!line.contains("10.0.0.7"));
    }
}
