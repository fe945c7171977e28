//! Stock movement history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single history entry, optionally tied to an item and/or an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i32,
    pub item_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub action: String,
    pub quantity_change: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewHistoryRecord {
    pub item_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub action: String,
    pub quantity_change: Option<i32>,
    pub notes: Option<String>,
}

/// History update data transfer object.
///
/// Nullable columns use `Option<Option<_>>`: `Some(None)` detaches or clears.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryChanges {
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub item_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub employee_id: Option<Option<i32>>,
    pub action: Option<String>,
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub quantity_change: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub notes: Option<Option<String>>,
}

/// History query filter. Both fields set means both must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryFilter {
    pub item_id: Option<i32>,
    pub employee_id: Option<i32>,
}

impl HistoryFilter {
    pub fn for_item(item_id: i32) -> Self {
        Self {
            item_id: Some(item_id),
            employee_id: None,
        }
    }

    pub fn for_employee(employee_id: i32) -> Self {
        Self {
            item_id: None,
            employee_id: Some(employee_id),
        }
    }
}
