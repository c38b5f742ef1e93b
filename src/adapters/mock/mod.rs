//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockBackend`] - Scriptable backend with call counters and latency
//! - [`MemoryClipboard`] - Clipboard that records writes

pub mod backend;
pub mod clipboard;

pub use backend::MockBackend;
pub use clipboard::MemoryClipboard;
