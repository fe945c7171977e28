//! Domain-level constants.
//!
//! These constants are part of the stored data format and must stay stable.

// =============================================================================
// Settings
// =============================================================================

/// Key of the settings row holding the low-stock threshold
pub const LOW_STOCK_THRESHOLD_KEY: &str = "LOW_STOCK_THRESHOLD";

// =============================================================================
// Tasks
// =============================================================================

/// Prefix of every generated task identifier
pub const TASK_ID_PREFIX: &str = "TASK";

/// Status assigned to tasks created without one
pub const DEFAULT_TASK_STATUS: &str = "pending";

// =============================================================================
// Employees
// =============================================================================

/// Role assigned to employees created without one
pub const DEFAULT_EMPLOYEE_ROLE: &str = "staff";

/// Normalize an email address for storage and lookup.
///
/// Lookups are case-insensitive and ignore surrounding whitespace, so the
/// same normalization is applied on every write path.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
