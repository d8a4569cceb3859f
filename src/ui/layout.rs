//! Layout calculations for the lazyfx TUI
//!
//! This module provides layout structs and helper functions for
//! calculating UI element positions and sizes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of a bordered single-line field (amount, selectors, banner)
pub const FIELD_HEIGHT: u16 = 3;

/// Width of the swap button between the selectors
pub const SWAP_BUTTON_WIDTH: u16 = 7;

/// Widest the converter card grows on large terminals
pub const MAX_CARD_WIDTH: u16 = 72;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (title, rate status)
    pub header: Rect,
    /// Main content area (converter card)
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

/// Areas of the converter card
#[derive(Debug, Clone, Copy)]
pub struct ConverterLayout {
    /// Error banner, zero height when there is no error
    pub banner: Rect,
    /// Amount input
    pub amount: Rect,
    /// Source currency selector
    pub from: Rect,
    /// Swap button
    pub swap: Rect,
    /// Target currency selector
    pub to: Rect,
    /// Result card
    pub result: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate the converter card layout inside the main area.
///
/// The card is horizontally centered and capped at [`MAX_CARD_WIDTH`].
#[must_use]
pub fn calculate_converter_layout(area: Rect, show_banner: bool) -> ConverterLayout {
    let width = area.width.min(MAX_CARD_WIDTH);
    let card = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    let banner_height = if show_banner { FIELD_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(5),
        ])
        .split(card);

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(SWAP_BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .split(rows[2]);

    ConverterLayout {
        banner: rows[0],
        amount: rows[1],
        from: selectors[0],
        swap: selectors[1],
        to: selectors[2],
        result: rows[3],
    }
}

/// Calculate a centered popup area within a parent area
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Calculate the display width of a string in characters
#[must_use]
pub fn string_width(s: &str) -> u16 {
    u16::try_from(s.chars().count()).unwrap_or(u16::MAX)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_app_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_app_layout(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.main.height, 50 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_converter_layout_caps_and_centers_width() {
        let area = Rect::new(0, 3, 100, 26);
        let layout = calculate_converter_layout(area, false);

        assert_eq!(layout.amount.width, MAX_CARD_WIDTH);
        assert_eq!(layout.amount.x, (100 - MAX_CARD_WIDTH) / 2);
        assert_eq!(layout.swap.width, SWAP_BUTTON_WIDTH);
        assert_eq!(layout.from.y, layout.to.y);
        assert!(layout.from.width.abs_diff(layout.to.width) <= 1);
    }

    #[test]
    fn test_converter_layout_banner() {
        let area = Rect::new(0, 3, 60, 26);

        let without = calculate_converter_layout(area, false);
        assert_eq!(without.banner.height, 0);
        assert_eq!(without.amount.y, 3);

        let with = calculate_converter_layout(area, true);
        assert_eq!(with.banner.height, FIELD_HEIGHT);
        assert_eq!(with.amount.y, 3 + FIELD_HEIGHT);
        assert!(with.result.height >= 5);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30); // (100 - 40) / 2
        assert_eq!(popup.y, 15); // (50 - 20) / 2
    }

    #[test]
    fn test_centered_popup_area_clamps_to_parent() {
        let parent = Rect::new(0, 0, 30, 10);
        let popup = centered_popup_area(parent, 80, 40);

        assert_eq!(popup.width, 26);
        assert_eq!(popup.height, 6);
    }

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("USD"), 3);
        assert_eq!(string_width("⇄"), 1);
        assert_eq!(string_width(""), 0);
    }
}
