//! Employee task entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TASK_STATUS;

/// Task assigned to an employee.
///
/// Identified by a generated `task_id` rather than a database key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub employee_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// Unset until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub employee_id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl NewTask {
    pub fn new(employee_id: i32, title: impl Into<String>) -> Self {
        Self {
            employee_id,
            title: title.into(),
            description: None,
            status: default_status(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskChanges {
    pub employee_id: Option<i32>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
}

fn default_status() -> String {
    DEFAULT_TASK_STATUS.to_string()
}
