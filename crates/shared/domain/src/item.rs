//! Inventory item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item creation data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: i32,
    pub location: Option<String>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Item update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemChanges {
    pub name: Option<String>,
    /// `Some(None)` clears the category
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub category: Option<Option<String>>,
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub location: Option<Option<String>>,
}
