//! AppMessage enum for async communication within the application.

use crate::error::GuardResult;
use crate::models::{AccountId, AccountSecret};

/// Results of backend calls made off the event loop
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Initial list arrived (already degraded to empty on failure)
    SecretsLoaded(Vec<AccountSecret>),
    /// An add finished
    SecretAdded(GuardResult<Vec<AccountSecret>>),
    /// A delete of `id`, issued at `index`, finished
    SecretDeleted {
        id: AccountId,
        index: usize,
        result: GuardResult<Vec<AccountSecret>>,
    },
}
