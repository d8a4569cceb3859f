//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner, used for clipboard
//! feedback and short notices. The color follows the message prefix.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};
use crate::ui::layout::string_width;

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Rows kept free below the toast so the footer stays readable.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one space either side of the message.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
///
/// - `[+] ...` renders in the success color
/// - `[x] ...` renders in the error color
/// - anything else renders white
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);
    if toast_area.width < 3 || toast_area.height < TOAST_HEIGHT {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Sizes the toast to its message, between [`MIN_TOAST_WIDTH`] and half the
/// area, never wider than the area itself.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let toast_width = string_width(message)
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
}

#[must_use]
fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
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

    #[test]
    fn test_calculate_toast_position_variants() {
        struct TestCase {
            name: &'static str,
            area: Rect,
            message: &'static str,
            expected_width: u16,
        }

        let cases = [
            TestCase {
                name: "short message uses minimum width",
                area: Rect::new(0, 0, 100, 50),
                message: "Hi",
                expected_width: MIN_TOAST_WIDTH,
            },
            TestCase {
                name: "medium message fits its text",
                area: Rect::new(0, 0, 100, 50),
                message: "[+] Copied: 1.00 USD = 0.92 EUR",
                expected_width: 35,
            },
            TestCase {
                name: "long message capped at half width",
                area: Rect::new(0, 0, 100, 50),
                message: "This is a very long message that should be constrained to half",
                expected_width: 50,
            },
            TestCase {
                name: "narrow area clamps to area",
                area: Rect::new(0, 0, 12, 10),
                message: "Test",
                expected_width: 12,
            },
        ];

        for case in &cases {
            let toast_area = calculate_toast_position(case.area, case.message);

            assert_eq!(toast_area.width, case.expected_width, "{}: width", case.name);
            assert_eq!(toast_area.height, TOAST_HEIGHT, "{}: height", case.name);
            assert!(
                toast_area.right() <= case.area.right(),
                "{}: x bounds",
                case.name
            );
            assert!(
                toast_area.bottom() <= case.area.bottom(),
                "{}: y bounds",
                case.name
            );
        }
    }

    #[rstest]
    #[case::success("[+] Copied", SUCCESS_COLOR)]
    #[case::error("[x] Failed to copy", ERROR_COLOR)]
    #[case::info("Currencies are still loading", Color::White)]
    #[case::empty("", Color::White)]
    fn test_determine_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(determine_text_color(message), expected);
    }

    #[rstest]
    fn test_render_toast_bottom_right(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Copied"))
            .unwrap();

        let text = buffer_text(test_terminal.backend().buffer());
        let lines: Vec<&str> = text.lines().collect();

        // 30 rows: toast occupies rows 25..28, text on the middle one
        assert!(lines[26].contains("[+] Copied"), "{text}");
        assert!(lines[26].ends_with('│'));
        assert!(lines[10].is_empty());
    }

    #[test]
    fn test_render_toast_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(2, 2)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[x] Failed"))
            .unwrap();
    }
}
