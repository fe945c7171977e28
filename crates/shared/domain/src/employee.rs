//! Employee domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EMPLOYEE_ROLE;

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    /// Stored lowercased and trimmed
    pub email: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee creation data transfer object
#[derive(Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// Plain PIN, hashed before it reaches storage
    pub pin: String,
}

/// Employee update data transfer object.
///
/// Absent fields are left untouched. A present `pin` replaces the stored hash.
#[derive(Clone, Default, Deserialize)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub pin: Option<String>,
}

fn default_role() -> String {
    DEFAULT_EMPLOYEE_ROLE.to_string()
}

impl NewEmployee {
    /// Create a new employee request with the default role
    pub fn new(name: impl Into<String>, email: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: default_role(),
            pin: pin.into(),
        }
    }
}

// Don't expose PINs in debug output
impl std::fmt::Debug for NewEmployee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewEmployee")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("pin", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for EmployeeChanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeChanges")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("pin", &self.pin.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
