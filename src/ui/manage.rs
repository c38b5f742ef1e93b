//! Management view: account list with masked secrets, plus an About section.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::chrome::APP_TITLE;
use super::components::{render_status_indicator, spinner_frame_for_tick, StatusIndicatorType};
use super::layout::{truncate, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED};
use crate::app::App;

/// Masked secrets all look the same length.
pub const MASKED_SECRET: &str = "••••••••••••";

const ABOUT_HEIGHT: u16 = 6;

pub fn render_manage(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let [list_area, about_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(ABOUT_HEIGHT)]).areas(area);

    render_account_list(frame, list_area, app, ctx);
    render_about(frame, about_area, app);
}

fn render_account_list(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = Block::default()
        .title(Span::styled(" Accounts ", Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if app.roster.is_empty() {
        lines.push(Line::from(Span::styled(
            "No accounts saved yet. Press a to add one.",
            Style::default().fg(COLOR_DIM),
        )));
    }

    let name_width = ctx.max_name_length();
    let visible = inner.height.saturating_sub(2).max(1) as usize;
    let first = app.selected.saturating_sub(visible.saturating_sub(1));

    for (index, entry) in app.roster.entries().iter().enumerate().skip(first).take(visible) {
        let row = app.rows.get(index);
        let selected = index == app.selected;

        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default().fg(COLOR_SELECTED).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let secret = if row.visible {
            entry.secret.shared_secret.clone()
        } else {
            MASKED_SECRET.to_string()
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                format!("{:<width$}", truncate(&entry.secret.name, name_width), width = name_width),
                name_style,
            ),
            Span::raw("  "),
            Span::styled(secret, Style::default().fg(COLOR_DIM)),
        ];
        if row.pending_delete {
            spans.push(Span::raw("  "));
            spans.extend(
                render_status_indicator(&StatusIndicatorType::spinner(
                    "Deleting…",
                    spinner_frame_for_tick(app.tick_count),
                ))
                .spans,
            );
        }
        lines.push(Line::from(spans));
    }

    if let Some(error) = &app.manage_error {
        lines.push(Line::from(""));
        lines.push(render_status_indicator(&StatusIndicatorType::error(error.clone())));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_about(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(" About ", Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            "Steam Guard codes generated from your shared secrets.",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            format!("Data: {}", app.config().data_dir.display()),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
