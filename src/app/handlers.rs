//! Message handling for the App.

use tracing::{info, warn};

use super::{App, AppMessage, Screen};
use crate::error::GuardResult;
use crate::models::{AccountId, AccountSecret};

impl App {
    /// Handle an incoming async message.
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SecretsLoaded(secrets) => self.on_secrets_loaded(secrets),
            AppMessage::SecretAdded(result) => self.on_secret_added(result),
            AppMessage::SecretDeleted { id, index, result } => {
                self.on_secret_deleted(id, index, result)
            }
        }
    }

    fn on_secrets_loaded(&mut self, secrets: Vec<AccountSecret>) {
        info!(count = secrets.len(), "Account list loaded");
        self.roster.load(secrets);
        self.rows.on_collection_loaded(&self.roster);
        self.loaded = true;
        self.clamp_selection();
        self.sync_timers();

        if self.roster.is_empty() && self.screen == Screen::Codes {
            self.open_add_dialog();
        }
    }

    fn on_secret_added(&mut self, result: GuardResult<Vec<AccountSecret>>) {
        self.mutation_pending = false;
        match result {
            Ok(secrets) => {
                if let Some(id) = self.roster.apply_added(secrets) {
                    if let Some(pos) = self.roster.position_of(id) {
                        self.selected = pos;
                    }
                }
                self.rows.on_added(&self.roster);
                self.add_dialog = None;
                self.sync_timers();
            }
            Err(e) => {
                warn!(code = e.error_code(), category = %e.category(), "Add rejected: {}", e);
                // List stays as it was; the dialog keeps the user's input.
                if let Some(dialog) = self.add_dialog.as_mut() {
                    dialog.pending = false;
                    dialog.error = Some(e.user_message());
                }
            }
        }
    }

    fn on_secret_deleted(
        &mut self,
        id: AccountId,
        index: usize,
        result: GuardResult<Vec<AccountSecret>>,
    ) {
        self.mutation_pending = false;
        match result {
            Ok(secrets) => {
                let removed = self.roster.apply_removed(index, secrets);
                if removed.is_some() && removed != Some(id) {
                    warn!("Deleted position {} no longer held account {}", index, id);
                }
                self.rows.on_deleted(index, &self.roster);
                self.manage_error = None;
                if self.copy_error.as_ref().map(|(e, _)| *e) == Some(id) {
                    self.copy_error = None;
                }
                self.clamp_selection();
                self.sync_timers();
            }
            Err(e) => {
                warn!(code = e.error_code(), category = %e.category(), "Delete failed: {}", e);
                if let Some(pos) = self.roster.position_of(id) {
                    self.rows.set_pending_delete(pos, false);
                }
                self.manage_error = Some(e.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{loaded_app, pump, settle};
    use super::*;
    use crate::adapters::MockBackend;
    use crate::error::GuardError;

    fn accounts(names: &[&str]) -> Vec<AccountSecret> {
        names.iter().map(|n| AccountSecret::new(*n, "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=")).collect()
    }

    #[tokio::test]
    async fn test_empty_list_opens_add_dialog_on_code_view() {
        let backend = MockBackend::new();
        let (app, _) = loaded_app(&backend).await;
        assert!(app.loaded);
        assert!(app.roster.is_empty());
        assert!(app.add_dialog.is_some());
    }

    #[tokio::test]
    async fn test_failed_list_reads_as_empty() {
        let backend = MockBackend::new().with_secrets(accounts(&["A"]));
        backend.fail_list("unreadable");
        let (app, _) = loaded_app(&backend).await;
        assert!(app.roster.is_empty());
        assert!(app.add_dialog.is_some());
    }

    #[tokio::test]
    async fn test_loaded_list_mounts_one_timer_per_account() {
        let backend = MockBackend::new().with_secrets(accounts(&["A", "B"]));
        let (app, _) = loaded_app(&backend).await;
        assert_eq!(app.roster.len(), 2);
        assert_eq!(app.timer_count(), 2);
        assert!(app.add_dialog.is_none());
    }

    #[tokio::test]
    async fn test_add_failure_keeps_list_and_shows_cause() {
        let backend = MockBackend::new().with_secrets(accounts(&["A"]));
        let (mut app, _) = loaded_app(&backend).await;
        app.open_add_dialog();
        app.mutation_pending = true;

        app.handle_message(AppMessage::SecretAdded(Err(GuardError::Backend(
            "Invalid shared secret: bad".into(),
        ))));

        assert_eq!(app.roster.len(), 1);
        assert!(!app.mutation_pending);
        let dialog = app.add_dialog.as_ref().unwrap();
        assert_eq!(dialog.error.as_deref(), Some("Invalid shared secret: bad"));
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list_and_clears_pending() {
        let backend = MockBackend::new().with_secrets(accounts(&["A", "B"]));
        let (mut app, _) = loaded_app(&backend).await;
        let id = app.roster.id_at(1).unwrap();
        app.rows.set_pending_delete(1, true);
        app.mutation_pending = true;

        app.handle_message(AppMessage::SecretDeleted {
            id,
            index: 1,
            result: Err(GuardError::Backend("disk full".into())),
        });

        assert_eq!(app.roster.len(), 2);
        assert!(!app.rows.get(1).pending_delete);
        assert_eq!(app.manage_error.as_deref(), Some("disk full"));
    }

    #[tokio::test]
    async fn test_delete_success_drops_only_that_timer() {
        let backend = MockBackend::new().with_secrets(accounts(&["A", "B", "C"]));
        let (mut app, _) = loaded_app(&backend).await;
        let a = app.roster.id_at(0).unwrap();
        let b = app.roster.id_at(1).unwrap();
        let c = app.roster.id_at(2).unwrap();
        app.mutation_pending = true;

        let secrets = vec![accounts(&["A"])[0].clone(), accounts(&["C"])[0].clone()];
        app.handle_message(AppMessage::SecretDeleted {
            id: b,
            index: 1,
            result: Ok(secrets),
        });
        settle().await;

        assert!(app.has_timer(a));
        assert!(!app.has_timer(b));
        assert!(app.has_timer(c));
        assert_eq!(app.roster.position_of(c), Some(1));
    }

    #[tokio::test]
    async fn test_initialize_round_trip() {
        let backend = MockBackend::new().with_secrets(accounts(&["Main"]));
        let (mut app, _) = loaded_app(&backend).await;
        app.open_add_dialog();
        if let Some(dialog) = app.add_dialog.as_mut() {
            dialog.name = "Alt".into();
            dialog.secret = "QUJDRA==".into();
        }
        app.submit_add();
        pump(&mut app).await;

        assert_eq!(app.roster.len(), 2);
        assert_eq!(app.selected, 1);
        assert!(app.add_dialog.is_none());
        assert_eq!(backend.stored().len(), 2);
    }
}
