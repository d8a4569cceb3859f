//! Currency picker popup rendering.
//!
//! A filter input above a scrollable table of the matching catalog entries.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use crate::domain::Currency;
use crate::state::PickerState;
use crate::theme::{BORDER_STYLE, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders the picker for `picker.slot`; `current` is the code the slot holds.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    picker: &PickerState,
    catalog: &[Currency],
    current: &str,
) {
    let popup_area = centered_popup_area(area, 56, 20);
    let title = format!("Select {} currency", picker.slot.label());

    let popup_block = create_popup_block(&title);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    render_filter_input(frame, chunks[0], &picker.query);

    let matches = picker.filtered(catalog);
    if matches.is_empty() {
        let empty = Paragraph::new("No matching currencies")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
    } else {
        render_matches(frame, chunks[1], &matches, picker.selected, current);
    }

    let help_text = format!(
        "{} of {}  ↑↓:Move  Enter:Select  Esc:Cancel",
        matches.len(),
        catalog.len()
    );
    let help_msg = Paragraph::new(help_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(help_msg, chunks[2]);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn render_filter_input(frame: &mut Frame, area: Rect, query: &str) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(" Filter ")
        .title_alignment(Alignment::Left);

    let input = Paragraph::new(format!("{query}▏")).block(input_block);
    frame.render_widget(input, area);
}

fn render_matches(
    frame: &mut Frame,
    area: Rect,
    matches: &[&Currency],
    selected: usize,
    current: &str,
) {
    let rows: Vec<Row> = matches
        .iter()
        .enumerate()
        .map(|(i, currency)| {
            let is_selected = i == selected;
            let is_current = currency.code == current;

            let indicator = if is_selected {
                "▶"
            } else if is_current {
                "●"
            } else {
                " "
            };

            let style = if is_selected {
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(SUCCESS_COLOR)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(indicator),
                Cell::from(currency.code.clone()),
                Cell::from(currency.name.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(10),
        ],
    )
    .column_spacing(1)
    .row_highlight_style(SELECTED_STYLE);

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

// ============================================================================
// Tests
// ============================================================================
