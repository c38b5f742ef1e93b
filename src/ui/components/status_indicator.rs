//! Status Indicator Component
//!
//! Single-line spinner, success and error markers used next to the control
//! they describe.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Success marker ("Copied!")
    Success { message: String },
    /// Error marker with the raw cause
    Error { message: String },
    /// Dim informational text
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for an event-loop tick count (one frame every 4 ticks).
pub fn spinner_frame_for_tick(tick_count: u64) -> usize {
    ((tick_count / 4) % SPINNER_FRAMES.len() as u64) as usize
}

/// Render a status indicator as one line
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_PENDING),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_PENDING)),
        ]),
        StatusIndicatorType::Success { message } => Line::from(vec![
            Span::styled("\u{2713} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ]),
        StatusIndicatorType::Info { message } => {
            Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_DIM)))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
