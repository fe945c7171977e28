//! Application settings and shared result markers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key/value setting row, unique by `setting_key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub setting_key: String,
    pub setting_value: i64,
    pub updated_at: DateTime<Utc>,
}

/// Result of a delete. Deletes never check that the row existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub success: bool,
}

impl Deleted {
    pub const OK: Deleted = Deleted { success: true };
}
