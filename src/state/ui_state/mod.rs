//! UI state management for the converter screen.
//!
//! This module manages presentation concerns only:
//! - Field focus (amount, from, to)
//! - Popup/modal state
//! - Toast notifications
//! - Help overlay visibility
//!
//! Converter data lives in [`ConverterState`](super::ConverterState).

mod popups;

pub use popups::{PickerState, PopupState};

use super::converter::CurrencySlot;
use crate::domain::Currency;

// ============================================================================
// Focus
// ============================================================================

/// Which form field currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The amount text field.
    #[default]
    Amount,
    /// The source currency selector.
    From,
    /// The target currency selector.
    To,
}

impl Focus {
    /// Cycles to the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Amount => Self::From,
            Self::From => Self::To,
            Self::To => Self::Amount,
        }
    }

    /// Cycles to the previous field.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Amount => Self::To,
            Self::From => Self::Amount,
            Self::To => Self::From,
        }
    }

    /// The currency selector this focus points at, if any.
    #[must_use]
    pub const fn slot(self) -> Option<CurrencySlot> {
        match self {
            Self::Amount => None,
            Self::From => Some(CurrencySlot::From),
            Self::To => Some(CurrencySlot::To),
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popup state and overlays.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.cycle_focus();
/// ui.show_toast("[+] Copied", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    // === Focus ===
    /// Which field currently has focus.
    pub focus: Focus,

    // === Popup State ===
    /// Current popup/modal state.
    pub popup_state: PopupState,

    // === Toast Notifications ===
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,

    // === Help Popup ===
    /// Whether the help popup is visible.
    pub show_help: bool,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the currency picker for `slot` with `current` highlighted.
    pub fn open_picker(&mut self, slot: CurrencySlot, catalog: &[Currency], current: &str) {
        self.popup_state = PopupState::CurrencyPicker(PickerState::new(slot, catalog, current));
    }

    /// Mutable access to the open picker, if any.
    pub fn picker_mut(&mut self) -> Option<&mut PickerState> {
        match &mut self.popup_state {
            PopupState::CurrencyPicker(picker) => Some(picker),
            _ => None,
        }
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Help
    // ========================================================================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

// ============================================================================
// Tests
// ============================================================================
