//! Modal dialogs: add account and delete confirmation.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field,
    render_status_indicator, spinner_frame_for_tick, DialogFrameConfig, InputFieldConfig,
    StatusIndicatorType,
};
use super::layout::LayoutContext;
use super::theme::COLOR_DIM;
use crate::app::{AddDialog, AddField, DeleteConfirm};

pub fn render_add_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    dialog: &AddDialog,
    tick_count: u64,
) {
    let name = InputFieldConfig::new("Account name", &dialog.name)
        .focused(dialog.focus == AddField::Name)
        .disabled(dialog.pending)
        .placeholder("e.g. Main");
    let secret = InputFieldConfig::new("Shared secret", &dialog.secret)
        .focused(dialog.focus == AddField::Secret)
        .disabled(dialog.pending)
        .password(true)
        .placeholder("base64 shared_secret");

    // Two fields, a status line and a blank line around it.
    let content_height =
        calculate_input_field_height(&name) + calculate_input_field_height(&secret) + 3;
    let config = DialogFrameConfig::new("Add account", content_height).max_width(64);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let mut y = inner.y;
    y += render_input_field(frame, Rect { y, ..inner }, &name);
    y += render_input_field(frame, Rect { y, ..inner }, &secret);

    let status = if dialog.pending {
        Some(StatusIndicatorType::spinner(
            "Adding account…",
            spinner_frame_for_tick(tick_count),
        ))
    } else {
        dialog.error.as_ref().map(|e| StatusIndicatorType::error(e.clone()))
    };

    if let Some(status) = status {
        let status_area = Rect {
            x: inner.x + 2,
            y: y + 1,
            width: inner.width.saturating_sub(4),
            height: 1,
        };
        if status_area.bottom() <= inner.bottom() {
            frame.render_widget(Paragraph::new(render_status_indicator(&status)), status_area);
        }
    }
}

pub fn render_delete_confirm(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    confirm: &DeleteConfirm,
) {
    let config = DialogFrameConfig::new("Delete account", 4).danger(true);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let lines = vec![
        Line::from(vec![
            Span::raw("Delete account "),
            Span::styled(confirm.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("? This cannot be undone."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter delete   n/Esc cancel",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let text_area = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);
}
