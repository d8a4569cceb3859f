//! The converter card: error banner, amount field, currency selectors,
//! swap button and result card.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{App, ConverterState, CurrencySlot, Focus};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;
use super::layout::calculate_converter_layout;

/// Braille spinner frames, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const SWAP_SYMBOL: &str = "⇄";

/// Renders the whole converter card into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let converter = &app.converter;
    let layout = calculate_converter_layout(area, converter.error().is_some());

    if let Some(error) = converter.error() {
        render_error_banner(frame, layout.banner, error);
    }
    render_amount_field(frame, layout.amount, converter, app.ui.focus == Focus::Amount);
    render_selector(
        frame,
        layout.from,
        converter,
        CurrencySlot::From,
        app.ui.focus == Focus::From,
    );
    render_swap_button(frame, layout.swap, converter.can_swap());
    render_selector(
        frame,
        layout.to,
        converter,
        CurrencySlot::To,
        app.ui.focus == Focus::To,
    );
    render_result_card(frame, layout.result, converter, app.animation_tick);
}

// ============================================================================
// Inputs
// ============================================================================

fn render_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(ERROR_COLOR))
        .title(" Error ")
        .title_style(Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD));

    let banner = Paragraph::new(error)
        .style(Style::default().fg(ERROR_COLOR))
        .block(block);
    frame.render_widget(banner, area);
}

fn render_amount_field(frame: &mut Frame, area: Rect, converter: &ConverterState, focused: bool) {
    let text = if focused {
        format!("{}▏", converter.amount())
    } else {
        converter.amount().to_string()
    };

    let field = Paragraph::new(text).block(create_border_block("Amount", focused));
    frame.render_widget(field, area);
}

/// Selector text: the catalog label, or the bare code while the catalog lacks it.
fn selector_text(converter: &ConverterState, slot: CurrencySlot) -> String {
    converter
        .currency_in(slot)
        .map_or_else(|| converter.code_in(slot).to_string(), |c| c.label())
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    converter: &ConverterState,
    slot: CurrencySlot,
    focused: bool,
) {
    let mut spans = vec![Span::raw(selector_text(converter, slot))];
    if focused {
        spans.push(Span::styled(" ▾", Style::default().fg(PRIMARY_COLOR)));
    }

    let selector = Paragraph::new(Line::from(spans)).block(create_border_block(slot.label(), focused));
    frame.render_widget(selector, area);
}

fn render_swap_button(frame: &mut Frame, area: Rect, enabled: bool) {
    let color = if enabled { PRIMARY_COLOR } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(color));

    let button = Paragraph::new(SWAP_SYMBOL)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

// ============================================================================
// Result
// ============================================================================

/// Lines shown inside the result card.
fn result_lines(converter: &ConverterState, animation_tick: u64) -> Vec<Line<'static>> {
    if converter.is_loading() {
        let frame = SPINNER_FRAMES[(animation_tick % SPINNER_FRAMES.len() as u64) as usize];
        return vec![
            Line::default(),
            Line::from(vec![
                Span::styled(frame, Style::default().fg(PRIMARY_COLOR)),
                Span::raw(" Loading..."),
            ]),
        ];
    }

    let mut lines = vec![
        Line::default(),
        Line::styled(
            converter.conversion_line(),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(rate) = converter.rate_line() {
        lines.push(Line::styled(rate, Style::default().fg(MUTED_COLOR)));
    }

    if let Some(updated) = converter.rates().updated_at_display() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Rates updated {updated}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines
}

fn render_result_card(frame: &mut Frame, area: Rect, converter: &ConverterState, tick: u64) {
    let card = Paragraph::new(result_lines(converter, tick))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(create_border_block("Result", false));
    frame.render_widget(card, area);
}

// ============================================================================
// Tests
// ============================================================================
