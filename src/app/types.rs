//! Type definitions for the application state.
//!
//! - [`Screen`] - Which view is displayed
//! - [`AddField`] / [`AddDialog`] - Add-account dialog state
//! - [`DeleteConfirm`] - Pending delete confirmation
//! - [`CopyFeedback`] - Transient "Copied!" marker

use tokio::time::Instant;

use crate::models::AccountId;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Rotating codes for every account
    #[default]
    Codes,
    /// Names, secrets, add and delete
    Manage,
}

impl Screen {
    pub fn other(self) -> Self {
        match self {
            Screen::Codes => Screen::Manage,
            Screen::Manage => Screen::Codes,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Codes => 0,
            Screen::Manage => 1,
        }
    }
}

/// Which add-dialog input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Name,
    Secret,
}

/// Add-account dialog state
#[derive(Debug, Clone, Default)]
pub struct AddDialog {
    pub name: String,
    pub secret: String,
    pub focus: AddField,
    /// Inline error: validation or the backend's message
    pub error: Option<String>,
    /// Submission in flight; inputs and submit are disabled
    pub pending: bool,
}

impl AddDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AddField::Name => &mut self.name,
            AddField::Secret => &mut self.secret,
        }
    }

    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            AddField::Name => AddField::Secret,
            AddField::Secret => AddField::Name,
        };
    }
}

/// Delete awaiting a yes/no from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    pub id: AccountId,
    pub index: usize,
    pub name: String,
}

/// "Copied!" shown on one card until `until`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub id: AccountId,
    pub until: Instant,
}
