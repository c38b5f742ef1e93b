//! Error handling for sdguard.
//!
//! | Variant | Raised by | Handling |
//! |---------|-----------|----------|
//! | `Validation` | add pre-flight | shown in the add dialog, backend untouched |
//! | `TimeSource` / `CodeGeneration` | rotation fetch | row enters Error, retried next period |
//! | `Backend` | add / delete | shown inline, prior list kept |
//! | `Clipboard` | copy | reported once, not retried |
//! | `Storage` | local backend | logged, surfaced as a backend failure |

mod category;
mod guard_error;

pub use category::ErrorCategory;
pub use guard_error::{Field, GuardError};

/// Type alias for Results using GuardError.
pub type GuardResult<T> = Result<T, GuardError>;
