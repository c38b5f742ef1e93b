//! Color theme constants for the sdguard UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Border of the selected card or row
pub const COLOR_SELECTED: Color = Color::Cyan;

// ============================================================================
// Code Card Colors
// ============================================================================

/// The code itself
pub const COLOR_CODE: Color = Color::White;

/// Plenty of time left (> 50%)
pub const COLOR_TIME_OK: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Running low (> 25%)
pub const COLOR_TIME_LOW: Color = Color::Yellow;

/// About to rotate
pub const COLOR_TIME_CRITICAL: Color = Color::Red;

/// Success feedback ("Copied!")
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Inline errors
pub const COLOR_ERROR: Color = Color::Red;

/// Pending operation spinner
pub const COLOR_PENDING: Color = Color::Yellow;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Gauge colour for the share of the period left.
pub fn countdown_color(progress_percent: f64) -> Color {
    if progress_percent > 50.0 {
        COLOR_TIME_OK
    } else if progress_percent > 25.0 {
        COLOR_TIME_LOW
    } else {
        COLOR_TIME_CRITICAL
    }
}
