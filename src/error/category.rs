//! Error category classification.
//!
//! Categories drive how the UI reacts to a failure: rotation errors retry on
//! their own at the next period boundary, user errors wait for corrected
//! input, system errors are reported and left alone.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The backend boundary could not produce a time or a code.
    /// Recovered automatically by the rotation timer.
    Backend,

    /// The backend rejected a mutation (bad secret, stale index).
    /// Not retryable until the user changes something.
    Rejected,

    /// Invalid user input caught before any backend call.
    User,

    /// OS-level failures such as an unavailable clipboard.
    System,

    /// Missing or malformed configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category clear up without user action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Backend)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Backend => "backend",
            ErrorCategory::Rejected => "rejected",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
