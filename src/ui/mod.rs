//! UI rendering module for the lazyfx TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of the converter card, popups and overlays.
//!
//! # Module Structure
//!
//! - `converter` - The converter card (amount, selectors, swap, result)
//! - `popups` - Modal dialogs (currency picker, messages, help)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod converter;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draw order: header, converter card and footer, then the active popup,
/// the help overlay and finally the toast on top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    converter::render(frame, layout.main, app);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);

    if app.ui.show_help {
        popups::render_help_popup(frame, size);
    }

    // Non-blocking overlay
    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Render popup overlays based on current popup state
fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::CurrencyPicker(picker) => {
            popups::render_currency_picker(
                frame,
                area,
                picker,
                app.converter.currencies(),
                app.converter.code_in(picker.slot),
            );
        }
        PopupState::Message(message) => {
            popups::render_message_popup(frame, area, message);
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
