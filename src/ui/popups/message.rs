//! Message popup rendering.
//!
//! Generic popup for notices such as the missing API key message.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::{centered_popup_area, string_width};

// ============================================================================
// Public API
// ============================================================================

/// Renders a message popup sized to its content.
///
/// # Example
///
/// ```ignore
/// use crate::ui::popups::message;
///
/// message::render(&mut frame, area, "Rates are cached for one hour.");
/// ```
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let longest_line = message
        .lines()
        .map(string_width)
        .max()
        .unwrap_or_else(|| string_width(message));

    let popup_width = 40.max(longest_line.saturating_add(6)).min(area.width * 8 / 10);
    let message_lines = wrapped_line_count(message, popup_width.saturating_sub(2));
    let popup_height = 6.max(message_lines.saturating_add(4));

    let popup_area = centered_popup_area(area, popup_width, popup_height);
    if popup_area.height < 4 || popup_area.width < 3 {
        return;
    }

    let popup_block = create_popup_block("Notice");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);

    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height.saturating_sub(2), // Reserve space for help text
    );

    let prompt = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(prompt, message_area);

    let separator = "─".repeat(popup_area.width.saturating_sub(2) as usize);
    let separator_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 3,
        popup_area.width - 2,
        1,
    );

    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height - 2,
        popup_area.width,
        1,
    );

    let help_msg = Paragraph::new("Enter:Close  Esc:Close  q:Quit")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(help_msg, help_area);
}

/// Rows `message` needs when wrapped to `width` columns.
fn wrapped_line_count(message: &str, width: u16) -> u16 {
    let width = width.max(1);
    let rows: u16 = message
        .lines()
        .map(|line| string_width(line).div_ceil(width).max(1))
        .fold(0, u16::saturating_add);
    rows.max(1)
}

// ============================================================================
// Tests
// ============================================================================
