//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Handles background clearing
//! and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_ERROR, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Optional fixed width (otherwise responsive)
    pub fixed_width: Option<u16>,
    pub min_width: u16,
    pub max_width: u16,
    /// Draw the border in the error color (destructive confirmations)
    pub danger: bool,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            fixed_width: None,
            min_width: 30,
            max_width: 60,
            danger: false,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if let Some(fixed) = config.fixed_width {
        return fixed.min(area_width.saturating_sub(4));
    }

    if ctx.is_extra_small() {
        // Take most of the screen, leave 2 cols margin
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame centered in `area` and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let border_color = if config.danger { COLOR_ERROR } else { COLOR_BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

/// Total dialog height for the given content height (adds borders)
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Add account", 10)
            .fixed_width(50)
            .min_width(40)
            .max_width(70)
            .danger(true);

        assert_eq!(config.title, "Add account");
        assert_eq!(config.fixed_width, Some(50));
        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
        assert!(config.danger);
    }

    #[test]
    fn test_calculate_dialog_width_fixed_clamped() {
        let ctx = LayoutContext::new(40, 20);
        let config = DialogFrameConfig::new("Test", 10).fixed_width(50);
        assert_eq!(calculate_dialog_width(&ctx, &config, 40), 36);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        // 50% of 120 = 60, clamped to max 60
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 60);
    }

    #[test]
    fn test_inner_area_sits_inside_borders() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::new(80, 24);
                let config = DialogFrameConfig::new("Confirm", 4).fixed_width(40);
                inner = render_dialog_frame(f, f.area(), &ctx, &config);
            })
            .unwrap();

        assert_eq!(inner.width, 38);
        assert_eq!(inner.height, 4);
        assert_eq!(inner.x, 21);
        assert_eq!(inner.y, 10);
    }
}
