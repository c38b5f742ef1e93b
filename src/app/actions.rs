//! User actions and key dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;
use tracing::{debug, info};

use super::{AddDialog, App, AppMessage, CopyFeedback, DeleteConfirm, Screen};
use crate::collection::SecretCollection;
use crate::rotation::{copy_code, RotationState};

impl App {
    /// Route a key press to whatever currently has input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.add_dialog.is_some() {
            self.handle_add_dialog_key(key);
            return;
        }

        if self.delete_confirm.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_delete(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => self.switch_screen(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('a') => self.open_add_dialog(),
            KeyCode::Char('c') | KeyCode::Enter if self.screen == Screen::Codes => {
                self.copy_selected()
            }
            KeyCode::Char('v') if self.screen == Screen::Manage => self.toggle_selected_visibility(),
            KeyCode::Char('d') | KeyCode::Delete if self.screen == Screen::Manage => {
                self.request_delete()
            }
            _ => {}
        }
    }

    fn handle_add_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.add_dialog.as_mut() else {
            return;
        };
        if dialog.pending {
            return;
        }

        match key.code {
            KeyCode::Esc => self.close_add_dialog(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => dialog.switch_field(),
            KeyCode::Enter => self.submit_add(),
            KeyCode::Backspace => {
                dialog.focused_value_mut().pop();
                dialog.error = None;
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                dialog.focused_value_mut().push(ch);
                dialog.error = None;
            }
            _ => {}
        }
    }

    /// Paste into the focused add-dialog field.
    pub fn paste(&mut self, text: &str) {
        if let Some(dialog) = self.add_dialog.as_mut() {
            if !dialog.pending {
                dialog
                    .focused_value_mut()
                    .push_str(text.trim_end_matches(['\r', '\n']));
                dialog.error = None;
                self.mark_dirty();
            }
        }
    }

    pub fn switch_screen(&mut self) {
        self.screen = self.screen.other();
        self.copy_feedback = None;
        self.copy_error = None;
        self.sync_timers();
        debug!(screen = ?self.screen, "Switched view");

        if self.screen == Screen::Codes && self.loaded && self.roster.is_empty() {
            self.open_add_dialog();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.roster.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn open_add_dialog(&mut self) {
        if self.mutation_pending || self.add_dialog.is_some() {
            return;
        }
        self.add_dialog = Some(AddDialog::new());
    }

    pub fn close_add_dialog(&mut self) {
        if self.add_dialog.as_ref().is_some_and(|d| d.pending) {
            return;
        }
        self.add_dialog = None;
    }

    /// Validate locally, then hand the add to the backend.
    ///
    /// Validation failures stay in the dialog and never reach the backend.
    pub fn submit_add(&mut self) {
        if self.mutation_pending {
            return;
        }
        let Some(dialog) = self.add_dialog.as_mut() else {
            return;
        };
        if dialog.pending {
            return;
        }

        if let Err(e) = SecretCollection::validate(&dialog.name, &dialog.secret) {
            dialog.error = Some(e.user_message());
            return;
        }

        dialog.pending = true;
        dialog.error = None;
        self.mutation_pending = true;

        let name = dialog.name.trim().to_string();
        let secret = dialog.secret.clone();
        let collection = self.collection.clone();
        let tx = self.message_tx.clone();
        info!("Adding account {:?}", name);
        tokio::spawn(async move {
            let result = collection.add(&name, &secret).await;
            let _ = tx.send(AppMessage::SecretAdded(result));
        });
    }

    /// Ask for confirmation before deleting the selected account.
    pub fn request_delete(&mut self) {
        if self.mutation_pending {
            return;
        }
        let Some(entry) = self.roster.get(self.selected) else {
            return;
        };
        self.delete_confirm = Some(DeleteConfirm {
            id: entry.id,
            index: self.selected,
            name: entry.secret.name.clone(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirm = None;
    }

    /// Issue the confirmed delete.
    pub fn confirm_delete(&mut self) {
        let Some(confirm) = self.delete_confirm.take() else {
            return;
        };
        if self.mutation_pending {
            return;
        }
        // Translate the id back to a position at the call boundary.
        let Some(index) = self.roster.position_of(confirm.id) else {
            return;
        };

        self.rows.set_pending_delete(index, true);
        self.mutation_pending = true;
        self.manage_error = None;

        let id = confirm.id;
        let collection = self.collection.clone();
        let tx = self.message_tx.clone();
        info!("Deleting account {:?} at position {}", confirm.name, index);
        tokio::spawn(async move {
            let result = collection.delete(index).await;
            let _ = tx.send(AppMessage::SecretDeleted { id, index, result });
        });
    }

    pub fn toggle_selected_visibility(&mut self) {
        self.rows.toggle_visibility(self.selected);
    }

    /// Copy the selected card's code and start the feedback window.
    pub fn copy_selected(&mut self) {
        let Some(id) = self.roster.id_at(self.selected) else {
            return;
        };
        let state = self.rotation_state(self.selected).unwrap_or_else(RotationState::default);

        match copy_code(&state, self.clipboard.as_mut()) {
            Ok(_) => {
                self.copy_error = None;
                self.copy_feedback = Some(CopyFeedback {
                    id,
                    until: Instant::now() + self.config().copy_feedback,
                });
            }
            Err(e) => {
                self.copy_feedback = None;
                self.copy_error = Some((id, e.user_message()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::test_support::{loaded_app, pump, settle};
    use super::*;
    use crate::adapters::MockBackend;
    use crate::models::AccountSecret;

    const SECRET: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=";

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    fn accounts(names: &[&str]) -> Vec<AccountSecret> {
        names.iter().map(|n| AccountSecret::new(*n, SECRET)).collect()
    }

    #[tokio::test]
    async fn test_empty_secret_never_reaches_backend() {
        let backend = MockBackend::new();
        let (mut app, _) = loaded_app(&backend).await;
        let before = backend.total_calls();

        type_text(&mut app, "Main");
        app.handle_key(key(KeyCode::Enter));

        let dialog = app.add_dialog.as_ref().unwrap();
        assert_eq!(dialog.error.as_deref(), Some("Secret is required"));
        assert!(!dialog.pending);
        assert!(!app.mutation_pending);
        assert_eq!(backend.total_calls(), before);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let backend = MockBackend::new();
        let (mut app, _) = loaded_app(&backend).await;
        type_text(&mut app, "   ");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, SECRET);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.add_dialog.as_ref().unwrap().error.as_deref(),
            Some("Name is required")
        );
    }

    #[tokio::test]
    async fn test_typing_fills_fields_and_submits() {
        let backend = MockBackend::new();
        let (mut app, _) = loaded_app(&backend).await;
        type_text(&mut app, "Main");
        app.handle_key(key(KeyCode::Tab));
        app.paste(&format!("{}\n", SECRET));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.mutation_pending);
        assert!(app.add_dialog.as_ref().unwrap().pending);
        // Keys are ignored while the add is in flight.
        app.handle_key(key(KeyCode::Esc));
        assert!(app.add_dialog.is_some());

        pump(&mut app).await;
        assert!(app.add_dialog.is_none());
        assert_eq!(backend.stored(), accounts(&["Main"]));
        assert_eq!(app.timer_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_goes_through_confirmation() {
        let backend = MockBackend::new().with_secrets(accounts(&["A", "B", "C"]));
        let (mut app, _) = loaded_app(&backend).await;
        app.switch_screen();
        assert_eq!(app.timer_count(), 0);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.delete_confirm.as_ref().map(|c| c.name.as_str()), Some("B"));
        assert_eq!(backend.calls().delete.load(std::sync::atomic::Ordering::SeqCst), 0);

        app.handle_key(key(KeyCode::Char('y')));
        assert!(app.rows.get(1).pending_delete);
        assert!(app.mutation_pending);
        // A second request is refused while one is pending.
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.delete_confirm.is_none());

        pump(&mut app).await;
        let names: Vec<_> = app.roster.secrets().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(!app.rows.any_pending_delete());
    }

    #[tokio::test]
    async fn test_cancelled_delete_does_nothing() {
        let backend = MockBackend::new().with_secrets(accounts(&["A"]));
        let (mut app, _) = loaded_app(&backend).await;
        app.switch_screen();
        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.delete_confirm.is_none());
        assert!(!app.mutation_pending);
        assert_eq!(backend.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_visibility_toggle_follows_account_after_delete() {
        let backend = MockBackend::new().with_secrets(accounts(&["A", "B", "C"]));
        let (mut app, _) = loaded_app(&backend).await;
        app.switch_screen();

        app.selected = 2;
        app.handle_key(key(KeyCode::Char('v')));
        app.selected = 0;
        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Enter));
        pump(&mut app).await;

        // "C" moved from position 2 to 1 and is still unmasked.
        assert!(!app.rows.get(0).visible);
        assert!(app.rows.get(1).visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_shows_feedback_for_two_seconds() {
        let backend = MockBackend::new()
            .with_secrets(accounts(&["A"]))
            .with_following_time(95);
        let (mut app, clipboard) = loaded_app(&backend).await;
        settle().await;
        let id = app.roster.id_at(0).unwrap();

        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(clipboard.last(), Some(MockBackend::code_for(SECRET, 95)));
        assert!(app.copied(id));

        tokio::time::sleep(Duration::from_millis(1900)).await;
        app.tick();
        assert!(app.copy_feedback.is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.tick();
        assert!(app.copy_feedback.is_none());
        assert!(!app.copied(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_without_code_reports_error() {
        let backend = MockBackend::new().with_secrets(accounts(&["A"]));
        backend.fail_generate("Failed to decode Base64: bad");
        let (mut app, clipboard) = loaded_app(&backend).await;
        settle().await;

        app.copy_selected();
        assert_eq!(clipboard.writes(), 0);
        let (_, message) = app.copy_error.clone().unwrap();
        assert_eq!(message, "No code to copy");
    }

    #[tokio::test]
    async fn test_switching_back_to_empty_codes_opens_dialog() {
        let backend = MockBackend::new();
        let (mut app, _) = loaded_app(&backend).await;
        app.handle_key(key(KeyCode::Esc));
        assert!(app.add_dialog.is_none());

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Manage);
        assert!(app.add_dialog.is_none());

        app.handle_key(key(KeyCode::Tab));
        assert!(app.add_dialog.is_some());
    }

    #[tokio::test]
    async fn test_q_and_ctrl_c_quit() {
        let backend = MockBackend::new().with_secrets(accounts(&["A"]));
        let (mut app, _) = loaded_app(&backend).await;
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let (mut app, _) = loaded_app(&backend).await;
        app.open_add_dialog();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
