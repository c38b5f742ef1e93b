//! Clipboard trait abstraction.
//!
//! Lets the copy action run against the system clipboard in production and
//! an in-memory recorder in tests.

/// Clipboard operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard could not be opened (no display, sandbox, ...).
    Unavailable(String),
    /// Opened but the write was refused.
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Failed to copy to clipboard: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something that can receive text.
pub trait ClipboardWriter: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
