//! In-process backend adapter.
//!
//! Implements [`GuardBackend`] on top of [`SecretStore`] and the
//! [`crate::codegen`] routines, so the binary works without any external
//! service.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::codegen;
use crate::models::AccountSecret;
use crate::storage::SecretStore;
use crate::traits::{BackendError, GuardBackend};

/// Local backend: system clock, file-backed secrets.
#[derive(Debug)]
pub struct LocalBackend {
    store: SecretStore,
    /// In-memory copy of the file; every mutation is written through.
    secrets: Mutex<Vec<AccountSecret>>,
}

impl LocalBackend {
    /// Open the backend, loading whatever the store currently holds.
    pub fn open(store: SecretStore) -> Self {
        let secrets = store.load();
        tracing::info!(
            "Loaded {} secret(s) from {:?}",
            secrets.len(),
            store.path()
        );
        Self {
            store,
            secrets: Mutex::new(secrets),
        }
    }

    pub fn store(&self) -> &SecretStore {
        &self.store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<AccountSecret>>, BackendError> {
        self.secrets
            .lock()
            .map_err(|_| BackendError::new("Secret list lock poisoned"))
    }

    fn now() -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

#[async_trait]
impl GuardBackend for LocalBackend {
    async fn current_time(&self) -> Result<u64, BackendError> {
        Ok(Self::now())
    }

    async fn generate_code(&self, secret: &str, time: Option<u64>) -> Result<String, BackendError> {
        let time = time.unwrap_or_else(Self::now);
        codegen::generate_code_at(secret, time).map_err(|e| BackendError::new(e.to_string()))
    }

    async fn list_secrets(&self) -> Result<Vec<AccountSecret>, BackendError> {
        Ok(self.lock()?.clone())
    }

    async fn add_secret(&self, name: &str, secret: &str) -> Result<Vec<AccountSecret>, BackendError> {
        // A secret that cannot produce a code is never stored.
        if let Err(e) = codegen::generate_code_at(secret, Self::now()) {
            return Err(BackendError::new(format!("Invalid shared secret: {}", e)));
        }

        let mut secrets = self.lock()?;
        let mut updated = secrets.clone();
        updated.push(AccountSecret::new(name, secret));
        self.store
            .save(&updated)
            .map_err(|e| BackendError::new(e.to_string()))?;
        *secrets = updated;

        tracing::info!("Stored secret for '{}' ({} total)", name, secrets.len());
        Ok(secrets.clone())
    }

    async fn delete_secret(&self, index: usize) -> Result<Vec<AccountSecret>, BackendError> {
        let mut secrets = self.lock()?;
        if index >= secrets.len() {
            return Err(BackendError::new(format!(
                "No account at position {} ({} stored)",
                index,
                secrets.len()
            )));
        }

        let mut updated = secrets.clone();
        let removed = updated.remove(index);
        self.store
            .save(&updated)
            .map_err(|e| BackendError::new(e.to_string()))?;
        *secrets = updated;

        tracing::info!("Removed secret for '{}' ({} left)", removed.name, secrets.len());
        Ok(secrets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=";

    fn backend(dir: &TempDir) -> LocalBackend {
        LocalBackend::open(SecretStore::new(dir.path()))
    }

    #[tokio::test]
    async fn test_generate_code_with_explicit_time() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);
        assert_eq!(backend.generate_code(VALID, Some(0)).await.unwrap(), "GG5F5");
    }

    #[tokio::test]
    async fn test_add_rejects_undecodable_secret() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);

        let err = backend.add_secret("Main", "***").await.unwrap_err();
        assert!(err.message().starts_with("Invalid shared secret:"));
        assert!(backend.list_secrets().await.unwrap().is_empty());
        assert!(!backend.store().path().exists());
    }

    #[tokio::test]
    async fn test_add_and_delete_write_through() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);

        backend.add_secret("A", VALID).await.unwrap();
        backend.add_secret("B", VALID).await.unwrap();
        let list = backend.add_secret("C", VALID).await.unwrap();
        assert_eq!(list.len(), 3);

        let list = backend.delete_secret(1).await.unwrap();
        let names: Vec<_> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        // A fresh backend over the same directory sees the same list.
        let reopened = LocalBackend::open(SecretStore::new(dir.path()));
        assert_eq!(reopened.list_secrets().await.unwrap(), list);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_an_error() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);
        backend.add_secret("A", VALID).await.unwrap();

        let err = backend.delete_secret(5).await.unwrap_err();
        assert!(err.message().contains("position 5"));
        assert_eq!(backend.list_secrets().await.unwrap().len(), 1);
    }
}
