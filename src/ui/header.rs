//! Header rendering for lazyfx
//!
//! Renders the title, subtitle and the rate status on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

pub const TITLE: &str = "Currency Converter";
pub const SUBTITLE: &str = " Exchange rates";

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(create_border_block("", false), area);

    if area.height <= 2 {
        return;
    }

    // Title shimmers while a fetch is in flight
    let title = if app.converter.is_loading() {
        create_animated_title(app.animation_tick)
    } else {
        create_static_title()
    };

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        1,
    );
    frame.render_widget(Paragraph::new(title), title_area);

    if area.width > 60 {
        render_rate_status(frame, area, app);
    }
}

/// Create the title with a breathing glow
fn create_animated_title(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;
    let glow = ((time * 0.8).sin() + 1.0) / 2.0;

    let blue = (140.0 + glow * 115.0) as u8;
    let green = (180.0 + glow * 75.0) as u8;
    let title_color = Color::Rgb((100.0 * glow) as u8, green, blue);

    Line::from(vec![
        Span::styled(
            TITLE,
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(SUBTITLE, Style::default().fg(MUTED_COLOR)),
    ])
}

/// Create the static title
fn create_static_title() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(SUBTITLE, Style::default().fg(MUTED_COLOR)),
    ])
}

/// Short status for the right side of the header.
fn rate_status(app: &App) -> (String, Color) {
    let converter = &app.converter;
    if converter.is_loading() {
        ("● Fetching rates".to_string(), WARNING_COLOR)
    } else if converter.error().is_some() {
        ("● Offline".to_string(), ERROR_COLOR)
    } else if converter.rates().is_empty() {
        ("○ No rates".to_string(), MUTED_COLOR)
    } else {
        (
            format!("● Base {}", converter.rates().base),
            SUCCESS_COLOR,
        )
    }
}

/// Render the rate status on the right side
fn render_rate_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = rate_status(app);
    let label = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);

    let status_area = Rect::new(area.right() - 22, area.y + 1, 20, 1);
    frame.render_widget(label, status_area);
}

// ============================================================================
// Tests
// ============================================================================
