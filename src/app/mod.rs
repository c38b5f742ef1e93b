//! Application state and event handling.
//!
//! [`App`] is owned by the event loop task. Backend mutations run on spawned
//! tasks and report back through [`AppMessage`]; rotation timers run on their
//! own tasks and are polled for changes on every loop iteration.

mod actions;
mod event_loop;
mod handlers;
mod messages;
mod types;

pub use event_loop::{run_app, UI_TICK};
pub use messages::AppMessage;
pub use types::{AddDialog, AddField, CopyFeedback, DeleteConfirm, Screen};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::debug;

use crate::client::CodeClient;
use crate::collection::{Roster, SecretCollection};
use crate::config::AppConfig;
use crate::models::AccountId;
use crate::rotation::{RotationState, RotationTimer};
use crate::row_state::RowStateMap;
use crate::traits::{ClipboardWriter, GuardBackend};

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Id-tracked copy of the backend's account list
    pub roster: Roster,
    /// Per-row flags for the management view
    pub rows: RowStateMap,
    /// Selected row, shared by both views
    pub selected: usize,
    /// False until the first list arrives
    pub loaded: bool,
    /// Open add-account dialog, if any
    pub add_dialog: Option<AddDialog>,
    /// Delete waiting for confirmation, if any
    pub delete_confirm: Option<DeleteConfirm>,
    /// An add or delete is in flight; further mutations are refused
    pub mutation_pending: bool,
    /// Last delete failure, shown on the management view
    pub manage_error: Option<String>,
    /// Last copy failure, shown on the card it belongs to
    pub copy_error: Option<(AccountId, String)>,
    /// Active "Copied!" marker
    pub copy_feedback: Option<CopyFeedback>,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    timers: HashMap<AccountId, RotationTimer>,
    client: CodeClient,
    collection: SecretCollection,
    clipboard: Box<dyn ClipboardWriter>,
    config: AppConfig,
}

impl App {
    /// Create a new App. Nothing is fetched until [`App::initialize`].
    pub fn new(
        backend: Arc<dyn GuardBackend>,
        clipboard: Box<dyn ClipboardWriter>,
        config: AppConfig,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            screen: Screen::default(),
            roster: Roster::new(),
            rows: RowStateMap::new(),
            selected: 0,
            loaded: false,
            add_dialog: None,
            delete_confirm: None,
            mutation_pending: false,
            manage_error: None,
            copy_error: None,
            copy_feedback: None,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            timers: HashMap::new(),
            client: CodeClient::new(backend.clone()),
            collection: SecretCollection::new(backend),
            clipboard,
            config,
        }
    }

    /// Request the account list in the background.
    pub fn initialize(&self) {
        let collection = self.collection.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let secrets = collection.list().await;
            let _ = tx.send(AppMessage::SecretsLoaded(secrets));
        });
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn client(&self) -> &CodeClient {
        &self.client
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Periodic housekeeping from the event loop.
    ///
    /// Expires the copy marker, advances the spinner while something is
    /// pending, and picks up new rotation states.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(feedback) = self.copy_feedback {
            if Instant::now() >= feedback.until {
                self.copy_feedback = None;
                self.mark_dirty();
            }
        }

        if self.mutation_pending {
            self.mark_dirty();
        }

        self.poll_timers();
    }

    /// Mark dirty if any timer published since the last poll.
    pub fn poll_timers(&mut self) {
        let mut changed = false;
        for timer in self.timers.values_mut() {
            if timer.has_changed() {
                timer.mark_seen();
                changed = true;
            }
        }
        if changed {
            self.mark_dirty();
        }
    }

    /// Rotation state for the account at `index`, if its card is mounted.
    pub fn rotation_state(&self, index: usize) -> Option<RotationState> {
        let id = self.roster.id_at(index)?;
        self.timers.get(&id).map(|t| t.snapshot())
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn has_timer(&self, id: AccountId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Whether the "Copied!" marker is up for `id`.
    pub fn copied(&self, id: AccountId) -> bool {
        self.copy_feedback
            .map(|f| f.id == id && Instant::now() < f.until)
            .unwrap_or(false)
    }

    /// Bring the mounted timers in line with the roster and screen.
    ///
    /// Cards exist only on the code view, so leaving it tears every timer
    /// down; removed accounts lose theirs; new accounts get a fresh one.
    pub(crate) fn sync_timers(&mut self) {
        if self.screen != Screen::Codes {
            if !self.timers.is_empty() {
                debug!(count = self.timers.len(), "Stopping rotation timers");
                self.timers.clear();
            }
            return;
        }

        let roster = &self.roster;
        self.timers.retain(|id, _| roster.position_of(*id).is_some());

        for entry in self.roster.entries() {
            if !self.timers.contains_key(&entry.id) {
                debug!(account = %entry.id, "Starting rotation timer");
                let timer = RotationTimer::spawn(
                    self.client.clone(),
                    entry.secret.shared_secret.clone(),
                    self.config.tick_interval,
                );
                self.timers.insert(entry.id, timer);
            }
        }
    }

    pub(crate) fn clamp_selection(&mut self) {
        if self.roster.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.roster.len() {
            self.selected = self.roster.len() - 1;
        }
    }
}
