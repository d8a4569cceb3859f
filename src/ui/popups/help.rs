//! Help popup showing all keybindings organized by context.
//!
//! Activated by '?' key, closed by Esc/q/?.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

/// Keybinding sections with descriptions.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global Keys",
        &[
            ("q", "Quit application"),
            ("r", "Refresh rates"),
            ("s", "Swap currencies"),
            ("c", "Copy result"),
            ("?", "Toggle help"),
            ("Tab / S-Tab", "Next / previous field"),
        ],
    ),
    (
        "Amount",
        &[
            ("0-9 . -", "Edit amount"),
            ("Backspace", "Delete character"),
        ],
    ),
    (
        "Currency Selectors",
        &[
            ("↑ / k", "Previous currency"),
            ("↓ / j", "Next currency"),
            ("Enter", "Open currency picker"),
        ],
    ),
    (
        "Currency Picker",
        &[
            ("Type", "Filter by code or name"),
            ("↑ / ↓", "Move selection"),
            ("Enter", "Select currency"),
            ("Esc", "Cancel"),
        ],
    ),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup with keybindings organized by section.
pub fn render(frame: &mut Frame, area: Rect) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_COLOR));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let paragraph = Paragraph::new(help_lines());
    frame.render_widget(paragraph, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (section_title, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(Span::styled(
            *section_title,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));

        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<14}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_help_popup_lists_sections(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();

        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Help (? to close)"), "{text}");
        assert!(text.contains("Global Keys"));
        assert!(text.contains("Swap currencies"));
        assert!(text.contains("Open currency picker"));
    }

    #[test]
    fn test_help_popup_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();
    }

    #[test]
    fn test_help_sections_not_empty() {
        assert!(!HELP_SECTIONS.is_empty(), "Help sections must not be empty");

        for (section_name, bindings) in HELP_SECTIONS {
            assert!(!section_name.is_empty(), "Section name must not be empty");
            assert!(!bindings.is_empty(), "Section must have bindings");

            for (key, desc) in *bindings {
                assert!(!key.is_empty(), "Key binding must not be empty");
                assert!(!desc.is_empty(), "Description must not be empty");
            }
        }
    }

    #[test]
    fn test_help_lines_fit_standard_terminal() {
        // 80x30 gives the popup 22 inner rows
        assert!(help_lines().len() <= 22);
    }
}
