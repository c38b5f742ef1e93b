//! End-to-end add and delete flows through the App, backed by the mock.

mod common;

use common::*;
use crossterm::event::KeyCode;
use sdguard::app::Screen;

#[tokio::test]
async fn test_add_appends_and_selects_new_account() {
    let backend = MockBackend::new().with_secrets(secrets(&["Main"]));
    let mut h = TestApp::loaded(&backend).await;

    h.press(KeyCode::Char('a'));
    h.type_text("  Alt  ");
    h.press(KeyCode::Tab);
    h.app.paste(TEST_SECRET);
    h.press(KeyCode::Enter);
    assert!(h.app.mutation_pending);

    h.pump().await;

    assert_eq!(h.names(), ["Main", "Alt"]);
    assert_eq!(backend.stored().len(), 2);
    assert_eq!(backend.stored()[1].shared_secret, TEST_SECRET);
    assert_eq!(h.app.selected, 1);
    assert!(h.app.add_dialog.is_none());
    assert!(!h.app.mutation_pending);

    let new_id = h.app.roster.id_at(1).unwrap();
    assert!(h.app.has_timer(new_id));
    assert_eq!(h.app.rows.len(), 2);
}

#[tokio::test]
async fn test_rejected_add_leaves_list_unchanged() {
    let backend = MockBackend::new().with_secrets(secrets(&["Main"]));
    backend.fail_add("Invalid shared secret: bad padding");
    let mut h = TestApp::loaded(&backend).await;
    let before: Vec<_> = h.app.roster.entries().iter().map(|e| e.id).collect();

    h.press(KeyCode::Char('a'));
    h.type_text("Alt");
    h.press(KeyCode::Tab);
    h.type_text("###");
    h.press(KeyCode::Enter);
    h.pump().await;

    let after: Vec<_> = h.app.roster.entries().iter().map(|e| e.id).collect();
    assert_eq!(before, after);
    let dialog = h.app.add_dialog.as_ref().expect("dialog stays open");
    assert_eq!(
        dialog.error.as_deref(),
        Some("Invalid shared secret: bad padding")
    );
    assert_eq!(dialog.name, "Alt");
    assert!(!dialog.pending);

    let screen = h.screen(100, 30);
    assert!(screen.contains("Invalid shared secret: bad padding"));
}

#[tokio::test]
async fn test_empty_secret_never_reaches_backend() {
    let backend = MockBackend::new();
    let mut h = TestApp::loaded(&backend).await;
    let calls = backend.total_calls();

    // Empty list on the code view opens the dialog by itself.
    assert!(h.app.add_dialog.is_some());
    h.type_text("Main");
    h.press(KeyCode::Enter);

    assert_eq!(
        h.app.add_dialog.as_ref().unwrap().error.as_deref(),
        Some("Secret is required")
    );
    assert!(!h.app.mutation_pending);
    assert_eq!(backend.total_calls(), calls);
}

#[tokio::test]
async fn test_delete_preserves_order_and_moves_row_state() {
    let backend = MockBackend::new().with_secrets(secrets(&["A", "B", "C"]));
    let mut h = TestApp::loaded(&backend).await;

    h.press(KeyCode::Tab);
    assert_eq!(h.app.screen, Screen::Manage);
    assert_eq!(h.app.timer_count(), 0);

    // Reveal C, then delete A.
    h.press(KeyCode::Down);
    h.press(KeyCode::Down);
    h.press(KeyCode::Char('v'));
    let c_id = h.app.roster.id_at(2).unwrap();
    h.press(KeyCode::Up);
    h.press(KeyCode::Up);
    h.press(KeyCode::Char('d'));
    h.press(KeyCode::Char('y'));
    assert!(h.app.rows.get(0).pending_delete);

    h.pump().await;

    assert_eq!(h.names(), ["B", "C"]);
    assert_eq!(h.app.roster.position_of(c_id), Some(1));
    assert!(!h.app.rows.get(0).visible);
    assert!(h.app.rows.get(1).visible);
    assert!(!h.app.rows.any_pending_delete());
}

#[tokio::test]
async fn test_failed_delete_keeps_list_and_reports() {
    let backend = MockBackend::new().with_secrets(secrets(&["A", "B"]));
    backend.fail_delete("No account at position 0 (0 stored)");
    let mut h = TestApp::loaded(&backend).await;

    h.press(KeyCode::Tab);
    h.press(KeyCode::Char('d'));
    h.press(KeyCode::Enter);
    h.pump().await;

    assert_eq!(h.names(), ["A", "B"]);
    assert!(!h.app.rows.get(0).pending_delete);
    assert_eq!(
        h.app.manage_error.as_deref(),
        Some("No account at position 0 (0 stored)")
    );
    assert!(h.screen(100, 30).contains("No account at position 0"));
}

#[tokio::test]
async fn test_deleting_last_account_shows_empty_state() {
    let backend = MockBackend::new().with_secrets(secrets(&["Only"]));
    let mut h = TestApp::loaded(&backend).await;

    h.press(KeyCode::Tab);
    h.press(KeyCode::Char('d'));
    h.press(KeyCode::Char('y'));
    h.pump().await;

    assert!(h.app.roster.is_empty());
    assert_eq!(h.app.selected, 0);
    assert!(h.screen(80, 24).contains("No accounts saved yet"));

    h.press(KeyCode::Tab);
    assert_eq!(h.app.screen, Screen::Codes);
    assert!(h.app.add_dialog.is_some());
}
