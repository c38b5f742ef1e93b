//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardWriter};

/// Records every write; can be told to refuse access.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Vec<String>>>,
    deny: Arc<Mutex<bool>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail as if access were denied.
    pub fn set_deny(&self, deny: bool) {
        *self.deny.lock().unwrap() = deny;
    }

    /// Most recent text written, if any.
    pub fn last(&self) -> Option<String> {
        self.contents.lock().unwrap().last().cloned()
    }

    pub fn writes(&self) -> usize {
        self.contents.lock().unwrap().len()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if *self.deny.lock().unwrap() {
            return Err(ClipboardError::Unavailable("access denied".to_string()));
        }
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
