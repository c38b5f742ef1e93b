//! Data models shared by the backend boundary and the UI.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One account as the backend stores it.
///
/// Identity at the backend is positional; see [`AccountId`] for the
/// session-local key the UI uses instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSecret {
    /// User-facing label. Not required to be unique.
    pub name: String,
    /// Opaque credential material, passed to the backend untouched.
    pub shared_secret: String,
}

impl AccountSecret {
    pub fn new(name: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shared_secret: shared_secret.into(),
        }
    }
}

/// On-disk layout of the secrets file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretsFile {
    #[serde(default)]
    pub secrets: Vec<AccountSecret>,
}

/// Stable identifier assigned to an account when it enters the roster.
///
/// Lives only for the session; the backend never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First block is plenty for log lines.
        let s = self.0.to_string();
        write!(f, "{}", &s[..8])
    }
}
