//! Code view: one card per account with its rotating code and countdown.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use super::components::{
    render_status_indicator, spinner_frame_for_tick, StatusIndicatorType,
};
use super::layout::{truncate, LayoutContext, CARD_HEIGHT};
use super::theme::{countdown_color, COLOR_BORDER, COLOR_CODE, COLOR_DIM, COLOR_SELECTED};
use crate::app::App;
use crate::collection::RosterEntry;
use crate::rotation::{Phase, RotationState};

/// Shown in place of a code that is not available.
pub const CODE_PLACEHOLDER: &str = "• • • • •";

/// `WJRKM` -> `W J R K M`
pub fn spaced_code(code: &str) -> String {
    let chars: Vec<String> = code.chars().map(String::from).collect();
    chars.join(" ")
}

pub fn render_codes(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    if !app.loaded {
        let line = render_status_indicator(&StatusIndicatorType::spinner(
            "Loading accounts…",
            spinner_frame_for_tick(app.tick_count),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), padded(area));
        return;
    }

    if app.roster.is_empty() {
        let line = Line::from(Span::styled(
            "No accounts yet. Press a to add one.",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), padded(area));
        return;
    }

    let columns = ctx.card_columns();
    let visible_rows = ctx.visible_card_rows(area.height);
    let selected_row = app.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = (first_row + row_offset) * columns + col;
            let Some(entry) = app.roster.get(index) else {
                return;
            };
            let state = app.rotation_state(index).unwrap_or_default();
            render_card(frame, *cell, app, ctx, index, entry, &state);
        }
    }
}

fn padded(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 3,
        height: area.height - area.height / 3,
        ..area
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    ctx: &LayoutContext,
    index: usize,
    entry: &RosterEntry,
    state: &RotationState,
) {
    let selected = index == app.selected;
    let border = if selected { COLOR_SELECTED } else { COLOR_BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", truncate(&entry.secret.name, ctx.max_name_length())),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [code_area, _, gauge_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let (code_text, code_style) = match &state.code {
        Some(code) => (
            spaced_code(code),
            Style::default().fg(COLOR_CODE).add_modifier(Modifier::BOLD),
        ),
        None => (CODE_PLACEHOLDER.to_string(), Style::default().fg(COLOR_DIM)),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(code_text, code_style)).alignment(Alignment::Center),
        code_area,
    );

    let progress = state.progress_percent();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(countdown_color(progress)))
        .ratio((progress / 100.0).clamp(0.0, 1.0))
        .label(format!("{}s", state.seconds_remaining))
        .use_unicode(true);
    frame.render_widget(gauge, gauge_area);

    let status = card_status(app, entry, state);
    frame.render_widget(
        Paragraph::new(render_status_indicator(&status)).alignment(Alignment::Center),
        status_area,
    );
}

/// One-line status under a card.
fn card_status(app: &App, entry: &RosterEntry, state: &RotationState) -> StatusIndicatorType {
    if app.copied(entry.id) {
        return StatusIndicatorType::success("Copied!");
    }
    if let Some((id, message)) = &app.copy_error {
        if *id == entry.id {
            return StatusIndicatorType::error(message.clone());
        }
    }
    match (state.phase, &state.last_error) {
        (Phase::Error, Some(message)) => StatusIndicatorType::error(message.clone()),
        (Phase::Idle, _) | (Phase::Loading, _) if state.code.is_none() => {
            StatusIndicatorType::spinner("Fetching code…", spinner_frame_for_tick(app.tick_count))
        }
        _ => StatusIndicatorType::info("c to copy"),
    }
}
