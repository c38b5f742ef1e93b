//! Common test utilities for integration tests.
//!
//! Builds an [`App`] wired to the in-memory mocks and drives its message
//! channel the way the event loop would.
//!
//! # Example
//!
//! ```ignore
//! let backend = MockBackend::new().with_secrets(vec![secret("Main")]);
//! let mut harness = TestApp::loaded(&backend).await;
//! harness.press(KeyCode::Tab);
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

pub use sdguard::adapters::mock::{MemoryClipboard, MockBackend};
use sdguard::app::App;
use sdguard::config::AppConfig;
use sdguard::models::AccountSecret;

/// Decodes to "12345678901234567890", the RFC 4226 test key.
pub const TEST_SECRET: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=";

pub fn secret(name: &str) -> AccountSecret {
    AccountSecret::new(name, TEST_SECRET)
}

pub fn secrets(names: &[&str]) -> Vec<AccountSecret> {
    names.iter().map(|n| secret(n)).collect()
}

/// App plus the mocks behind it.
pub struct TestApp {
    pub app: App,
    pub backend: MockBackend,
    pub clipboard: MemoryClipboard,
}

impl TestApp {
    /// App wired to `backend`, before the initial list is requested.
    pub fn new(backend: &MockBackend) -> Self {
        Self::with_config(backend, AppConfig::default())
    }

    pub fn with_config(backend: &MockBackend, config: AppConfig) -> Self {
        let clipboard = MemoryClipboard::new();
        let app = App::new(
            Arc::new(backend.clone()),
            Box::new(clipboard.clone()),
            config.with_data_dir("/nonexistent"),
        );
        Self {
            app,
            backend: backend.clone(),
            clipboard,
        }
    }

    /// App with the initial list already applied.
    pub async fn loaded(backend: &MockBackend) -> Self {
        let mut harness = Self::new(backend);
        harness.app.initialize();
        harness.pump().await;
        harness
    }

    /// Apply the next async message from a background task.
    pub async fn pump(&mut self) {
        let msg = self
            .app
            .message_rx
            .as_mut()
            .expect("receiver already taken")
            .recv()
            .await
            .expect("message channel closed");
        self.app.handle_message(msg);
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Render into an off-screen buffer and return it as text.
    pub fn screen(&self, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| sdguard::ui::render(f, &self.app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn names(&self) -> Vec<String> {
        self.app
            .roster
            .entries()
            .iter()
            .map(|e| e.secret.name.clone())
            .collect()
    }
}

/// Let spawned timers run briefly.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}
