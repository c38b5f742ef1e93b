//! Header and footer shared by both views.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, Screen};

pub const APP_TITLE: &str = "Steam Desktop Guard";

const NAV_ITEMS: [TabItem<'static>; 2] = [
    TabItem {
        label: "Codes",
        short_label: "Codes",
    },
    TabItem {
        label: "Manage accounts",
        short_label: "Manage",
    },
];

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let nav = render_tab_selector(&NAV_ITEMS, app.screen.index(), ctx);
    let title = Span::styled(
        format!(" {}", APP_TITLE),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    let lines = if ctx.is_compact() {
        let mut spans = vec![title];
        spans.extend(nav.spans);
        vec![Line::from(spans)]
    } else {
        vec![
            Line::from(vec![
                title,
                Span::styled(
                    format!("  v{}", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(COLOR_DIM),
                ),
            ]),
            Line::from(""),
            nav,
        ]
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Key hints for whatever currently has input.
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if let Some(dialog) = &app.add_dialog {
        if dialog.pending {
            return vec![("", "Adding account…")];
        }
        return vec![("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")];
    }
    if app.delete_confirm.is_some() {
        return vec![("y/Enter", "delete"), ("n/Esc", "cancel")];
    }

    let mut hints = vec![("Tab", "switch view"), ("↑↓", "select"), ("a", "add")];
    match app.screen {
        Screen::Codes => hints.push(("c/Enter", "copy")),
        Screen::Manage => {
            hints.push(("v", "show/hide secret"));
            hints.push(("d", "delete"));
        }
    }
    hints.push(("q", "quit"));
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in key_hints(app) {
        if !key.is_empty() {
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(desc, Style::default().fg(COLOR_DIM)));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
