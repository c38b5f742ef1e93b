//! Rotating code display for one account.
//!
//! - [`engine`] - synchronous countdown/fetch state machine
//! - [`timer`] - tokio task that drives the engine once per second

pub mod engine;
pub mod timer;

pub use engine::{
    progress_percent, seconds_remaining_at, Applied, FetchTicket, Phase, RotationEngine,
    RotationState, TickOutcome, PERIOD,
};
pub use timer::RotationTimer;

use crate::error::{GuardError, GuardResult};
use crate::traits::ClipboardWriter;

/// Copy the displayed code to the clipboard and return what was copied.
///
/// Fails without touching the clipboard when no code is on screen.
pub fn copy_code(state: &RotationState, clipboard: &mut dyn ClipboardWriter) -> GuardResult<String> {
    let code = state
        .code
        .as_deref()
        .ok_or_else(|| GuardError::Clipboard("No code to copy".to_string()))?;

    clipboard
        .write_text(code)
        .map_err(|e| GuardError::Clipboard(e.to_string()))?;
    tracing::debug!("Copied code to clipboard");
    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryClipboard;

    fn showing(code: Option<&str>) -> RotationState {
        RotationState {
            phase: Phase::Displaying,
            code: code.map(str::to_string),
            ..RotationState::default()
        }
    }

    #[test]
    fn test_copy_writes_exact_code() {
        let mut clipboard = MemoryClipboard::new();
        let copied = copy_code(&showing(Some("WJRKM")), &mut clipboard).unwrap();
        assert_eq!(copied, "WJRKM");
        assert_eq!(clipboard.last().as_deref(), Some("WJRKM"));
    }

    #[test]
    fn test_copy_without_code_leaves_clipboard_alone() {
        let mut clipboard = MemoryClipboard::new();
        let err = copy_code(&showing(None), &mut clipboard).unwrap_err();
        assert_eq!(err, GuardError::Clipboard("No code to copy".into()));
        assert_eq!(clipboard.writes(), 0);
    }

    #[test]
    fn test_copy_reports_denied_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_deny(true);
        let err = copy_code(&showing(Some("WJRKM")), &mut clipboard).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Clipboard unavailable: access denied"
        );
    }
}
