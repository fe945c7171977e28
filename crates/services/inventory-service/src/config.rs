//! Inventory service configuration.

use std::env;

use common::DatabaseConfig;

/// Inventory service configuration.
#[derive(Clone, Default)]
pub struct InventoryServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

// Connection URLs carry credentials
impl std::fmt::Debug for InventoryServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryServiceConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.database.max_connections)
            .field("min_connections", &self.database.min_connections)
            .finish()
    }
}

impl InventoryServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("INVENTORY_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("INVENTORY_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: defaults.min_connections,
            },
        }
    }
}
