//! Secret collection manager.
//!
//! [`SecretCollection`] wraps the backend's list/add/delete calls with local
//! validation and error mapping. [`Roster`] is the UI-side snapshot of that
//! list, giving each position a stable [`AccountId`] so per-account state can
//! follow an account when positions shift.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{Field, GuardError, GuardResult};
use crate::models::{AccountId, AccountSecret};
use crate::traits::GuardBackend;

/// Validated front end to the backend's secret list.
///
/// Holds no lock of its own; the caller keeps at most one mutation in flight.
#[derive(Clone)]
pub struct SecretCollection {
    backend: Arc<dyn GuardBackend>,
}

impl SecretCollection {
    pub fn new(backend: Arc<dyn GuardBackend>) -> Self {
        Self { backend }
    }

    /// Current list. Backend failure is logged and reads as empty.
    pub async fn list(&self) -> Vec<AccountSecret> {
        match self.backend.list_secrets().await {
            Ok(secrets) => secrets,
            Err(e) => {
                warn!("Failed to load secrets, showing none: {}", e);
                Vec::new()
            }
        }
    }

    /// Check both fields are non-empty after trimming.
    pub fn validate(name: &str, shared_secret: &str) -> GuardResult<()> {
        if name.trim().is_empty() {
            return Err(GuardError::validation(Field::Name));
        }
        if shared_secret.trim().is_empty() {
            return Err(GuardError::validation(Field::Secret));
        }
        Ok(())
    }

    /// Append an account; returns the new canonical list.
    pub async fn add(&self, name: &str, shared_secret: &str) -> GuardResult<Vec<AccountSecret>> {
        Self::validate(name, shared_secret)?;

        let secrets = self
            .backend
            .add_secret(name, shared_secret)
            .await
            .map_err(|e| GuardError::Backend(e.to_string()))?;
        info!(count = secrets.len(), "Added account {:?}", name);
        Ok(secrets)
    }

    /// Remove the account at `index`; returns the new canonical list.
    pub async fn delete(&self, index: usize) -> GuardResult<Vec<AccountSecret>> {
        let secrets = self
            .backend
            .delete_secret(index)
            .await
            .map_err(|e| GuardError::Backend(e.to_string()))?;
        info!(count = secrets.len(), "Deleted account at position {}", index);
        Ok(secrets)
    }
}

/// One row of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: AccountId,
    pub secret: AccountSecret,
}

/// Ordered, id-tracked copy of the backend list.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with `secrets`, minting fresh ids.
    pub fn load(&mut self, secrets: Vec<AccountSecret>) {
        self.entries = secrets
            .into_iter()
            .map(|secret| RosterEntry {
                id: AccountId::new(),
                secret,
            })
            .collect();
    }

    /// Adopt the list returned by a successful add.
    ///
    /// The backend appends, so existing positions keep their ids and only the
    /// tail gets a new one. Any other shape means the list changed under us
    /// and the roster is rebuilt. Returns the id of the added account.
    pub fn apply_added(&mut self, secrets: Vec<AccountSecret>) -> Option<AccountId> {
        let prefix_matches = secrets.len() == self.entries.len() + 1
            && self
                .entries
                .iter()
                .zip(&secrets)
                .all(|(entry, secret)| &entry.secret == secret);

        if !prefix_matches {
            warn!("Unexpected list after add, reloading roster");
            self.load(secrets);
            return self.entries.last().map(|e| e.id);
        }

        let id = AccountId::new();
        if let Some(secret) = secrets.into_iter().last() {
            self.entries.push(RosterEntry { id, secret });
        }
        Some(id)
    }

    /// Adopt the list returned by a successful delete of `removed_index`.
    ///
    /// Returns the id that was removed, or `None` if the roster had to be
    /// rebuilt from scratch.
    pub fn apply_removed(
        &mut self,
        removed_index: usize,
        secrets: Vec<AccountSecret>,
    ) -> Option<AccountId> {
        if removed_index >= self.entries.len() || secrets.len() + 1 != self.entries.len() {
            warn!("Unexpected list after delete, reloading roster");
            self.load(secrets);
            return None;
        }

        let removed = self.entries.remove(removed_index);
        // Names or secrets may have been edited elsewhere; trust the backend.
        for (entry, secret) in self.entries.iter_mut().zip(secrets) {
            entry.secret = secret;
        }
        Some(removed.id)
    }

    pub fn position_of(&self, id: AccountId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<AccountId> {
        self.entries.get(index).map(|e| e.id)
    }

    pub fn get(&self, index: usize) -> Option<&RosterEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Plain secrets in order.
    pub fn secrets(&self) -> Vec<AccountSecret> {
        self.entries.iter().map(|e| e.secret.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockBackend;

    fn secrets(names: &[&str]) -> Vec<AccountSecret> {
        names
            .iter()
            .map(|n| AccountSecret::new(*n, format!("{}-secret", n)))
            .collect()
    }

    fn collection(backend: &MockBackend) -> SecretCollection {
        SecretCollection::new(Arc::new(backend.clone()))
    }

    #[tokio::test]
    async fn test_list_degrades_to_empty() {
        let backend = MockBackend::new().with_secrets(secrets(&["A"]));
        backend.fail_list("disk on fire");
        assert!(collection(&backend).list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_validates_before_backend() {
        let backend = MockBackend::new();
        let c = collection(&backend);

        assert_eq!(
            c.add("", "c2VjcmV0").await.unwrap_err(),
            GuardError::validation(Field::Name)
        );
        assert_eq!(
            c.add("Main", "   ").await.unwrap_err(),
            GuardError::validation(Field::Secret)
        );
        assert_eq!(backend.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_add_appends() {
        let backend = MockBackend::new().with_secrets(secrets(&["A"]));
        let list = collection(&backend).add("B", "c2VjcmV0").await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], AccountSecret::new("B", "c2VjcmV0"));
    }

    #[tokio::test]
    async fn test_add_rejection_is_backend_error() {
        let backend = MockBackend::new().with_secrets(secrets(&["A"]));
        backend.fail_add("Invalid shared secret: bad padding");
        let err = collection(&backend).add("B", "!!").await.unwrap_err();
        assert_eq!(err, GuardError::Backend("Invalid shared secret: bad padding".into()));
        assert_eq!(backend.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_an_error() {
        let backend = MockBackend::new().with_secrets(secrets(&["A", "B"]));
        let err = collection(&backend).delete(5).await.unwrap_err();
        assert!(matches!(err, GuardError::Backend(_)));
        assert_eq!(backend.stored().len(), 2);
    }

    #[test]
    fn test_roster_add_keeps_existing_ids() {
        let mut roster = Roster::new();
        roster.load(secrets(&["A", "B"]));
        let a = roster.id_at(0).unwrap();
        let b = roster.id_at(1).unwrap();

        let c = roster.apply_added(secrets(&["A", "B", "C"])).unwrap();
        assert_eq!(roster.id_at(0), Some(a));
        assert_eq!(roster.id_at(1), Some(b));
        assert_eq!(roster.position_of(c), Some(2));
    }

    #[test]
    fn test_roster_remove_shifts_ids() {
        let mut roster = Roster::new();
        roster.load(secrets(&["A", "B", "C"]));
        let a = roster.id_at(0).unwrap();
        let b = roster.id_at(1).unwrap();
        let c = roster.id_at(2).unwrap();

        assert_eq!(roster.apply_removed(0, secrets(&["B", "C"])), Some(a));
        assert_eq!(roster.position_of(a), None);
        assert_eq!(roster.position_of(b), Some(0));
        assert_eq!(roster.position_of(c), Some(1));
    }

    #[test]
    fn test_roster_reloads_on_unexpected_shape() {
        let mut roster = Roster::new();
        roster.load(secrets(&["A", "B"]));
        let a = roster.id_at(0).unwrap();

        assert_eq!(roster.apply_removed(0, secrets(&["X", "Y", "Z"])), None);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.position_of(a), None);
        assert_eq!(roster.get(0).unwrap().secret.name, "X");
    }
}
