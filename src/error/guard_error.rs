//! Unified error type for sdguard.

use thiserror::Error;

use super::category::ErrorCategory;

/// Which add-account field failed pre-flight validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Secret,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Secret => "Secret",
        }
    }
}

/// Every failure the core can surface.
///
/// Backend causes are kept verbatim so the UI can show the raw message next
/// to the control that triggered it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuardError {
    /// Local pre-flight check failed; the backend was never called.
    #[error("{} is required", .field.label())]
    Validation { field: Field },

    /// The backend could not report the current time.
    #[error("Failed to get server time: {0}")]
    TimeSource(String),

    /// The backend refused to derive a code for the secret.
    #[error("{0}")]
    CodeGeneration(String),

    /// An add or delete was rejected by the backend.
    #[error("{0}")]
    Backend(String),

    /// Nothing to copy, or the clipboard is unavailable.
    #[error("{0}")]
    Clipboard(String),

    /// Reading or writing the secrets file failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GuardError {
    pub fn validation(field: Field) -> Self {
        GuardError::Validation { field }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuardError::Validation { .. } => ErrorCategory::User,
            GuardError::TimeSource(_) | GuardError::CodeGeneration(_) => ErrorCategory::Backend,
            GuardError::Backend(_) => ErrorCategory::Rejected,
            GuardError::Clipboard(_) => ErrorCategory::System,
            GuardError::Storage(_) => ErrorCategory::Configuration,
        }
    }

    /// Check if this error is retryable without user action.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Message shown inline in the UI.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GuardError::Validation { .. } => "VALIDATION",
            GuardError::TimeSource(_) => "TIME_SOURCE",
            GuardError::CodeGeneration(_) => "CODE_GENERATION",
            GuardError::Backend(_) => "BACKEND",
            GuardError::Clipboard(_) => "CLIPBOARD",
            GuardError::Storage(_) => "STORAGE",
        }
    }
}

impl From<std::io::Error> for GuardError {
    fn from(err: std::io::Error) -> Self {
        GuardError::Storage(err.to_string())
    }
}
