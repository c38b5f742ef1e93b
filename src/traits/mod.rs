//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`GuardBackend`] - Time, code generation and secret storage
//! - [`ClipboardWriter`] - System clipboard writes

pub mod backend;
pub mod clipboard;

pub use backend::{BackendError, GuardBackend};
pub use clipboard::{ClipboardError, ClipboardWriter};
