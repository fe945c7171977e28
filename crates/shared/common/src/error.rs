//! Unified error handling for the data-access layer.
//!
//! Backend failures pass through unmapped as `Database`; login failures are
//! collapsed into a single `Authentication` error so callers cannot tell a
//! wrong email from a wrong PIN.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid email or PIN")]
    Authentication,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Authentication => "AUTHENTICATION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "BACKEND_ERROR",
        }
    }

    /// Get user-facing message (hides backend details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Whether this error came from the backend store
    pub fn is_backend(&self) -> bool {
        #[cfg(feature = "database")]
        if matches!(self, AppError::Database(_)) {
            return true;
        }
        false
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}
