//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`LocalBackend`] - File storage plus in-process code derivation
//! - [`SystemClipboard`] - OS clipboard through `arboard`
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod local_backend;
pub mod mock;
pub mod system_clipboard;

pub use local_backend::LocalBackend;
pub use mock::{MemoryClipboard, MockBackend};
pub use system_clipboard::SystemClipboard;
