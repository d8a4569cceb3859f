//! Footer rendering module for the lazyfx TUI.
//!
//! This module provides the footer bar that displays keyboard shortcuts
//! for whatever currently has the keyboard.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for an input context.
#[must_use]
pub const fn footer_hints(context: InputContext) -> &'static str {
    match context {
        InputContext::AmountInput => "Tab:Focus  s:Swap  c:Copy  r:Refresh  ?:Help  q:Quit",
        InputContext::CurrencySelect => {
            "↑↓:Change  Enter:Pick  Tab:Focus  s:Swap  c:Copy  r:Refresh  ?:Help  q:Quit"
        }
        InputContext::CurrencyPicker => "Type:Filter  ↑↓:Move  Enter:Select  Esc:Cancel",
        InputContext::MessagePopup => "Enter:Close  Esc:Close  q:Quit",
        InputContext::HelpPopup => "?:Close  Esc:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(footer_hints(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
