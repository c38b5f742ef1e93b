//! UI rendering for sdguard.
//!
//! - [`chrome`] - header with view nav, footer with key hints
//! - [`codes`] - rotating code cards
//! - [`manage`] - account list and About section
//! - [`dialogs`] - add account, delete confirmation

pub mod chrome;
pub mod codes;
pub mod components;
pub mod dialogs;
pub mod layout;
pub mod manage;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::{App, Screen};
use layout::LayoutContext;

/// Footer rows (border + hints).
const FOOTER_HEIGHT: u16 = 2;

/// Render the whole UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    chrome::render_header(frame, header, app, &ctx);
    match app.screen {
        Screen::Codes => codes::render_codes(frame, body, app, &ctx),
        Screen::Manage => manage::render_manage(frame, body, app, &ctx),
    }
    chrome::render_footer(frame, footer, app);

    if let Some(dialog) = &app.add_dialog {
        dialogs::render_add_dialog(frame, area, &ctx, dialog, app.tick_count);
    } else if let Some(confirm) = &app.delete_confirm {
        dialogs::render_delete_confirm(frame, area, &ctx, confirm);
    }
}
