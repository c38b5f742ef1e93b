//! Backend command boundary.
//!
//! Everything the core needs from the outside world: time, code generation,
//! and secret persistence. The core never derives codes or touches storage
//! itself.

use async_trait::async_trait;

use crate::models::AccountSecret;

/// Opaque failure from the backend, carrying its human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BackendError {}

/// Trait for the backend command interface.
///
/// Implementations include [`crate::adapters::LocalBackend`] (file storage and
/// in-process code derivation) and [`crate::adapters::mock::MockBackend`].
///
/// # Example
///
/// ```ignore
/// use sdguard::traits::GuardBackend;
///
/// async fn first_code<B: GuardBackend>(backend: &B) -> Option<String> {
///     let secrets = backend.list_secrets().await.ok()?;
///     let first = secrets.first()?;
///     backend.generate_code(&first.shared_secret, None).await.ok()
/// }
/// ```
#[async_trait]
pub trait GuardBackend: Send + Sync {
    /// Current backend time in unix seconds.
    async fn current_time(&self) -> Result<u64, BackendError>;

    /// Derive the code for `secret` at `time`, or at the backend's current
    /// time when `time` is `None`.
    async fn generate_code(&self, secret: &str, time: Option<u64>) -> Result<String, BackendError>;

    /// All stored secrets in canonical order.
    async fn list_secrets(&self) -> Result<Vec<AccountSecret>, BackendError>;

    /// Append a secret and return the new canonical list.
    async fn add_secret(&self, name: &str, secret: &str) -> Result<Vec<AccountSecret>, BackendError>;

    /// Remove the secret at `index` and return the new canonical list.
    async fn delete_secret(&self, index: usize) -> Result<Vec<AccountSecret>, BackendError>;
}
