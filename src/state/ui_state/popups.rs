//! Popup state types: the currency picker and message popups.

use crate::domain::{Currency, position_of};
use crate::state::converter::CurrencySlot;

// ============================================================================
// Currency Picker
// ============================================================================

/// Filterable currency list opened from a From/To selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    /// Selector the chosen code is applied to.
    pub slot: CurrencySlot,
    /// Filter text matched against code and name.
    pub query: String,
    /// Highlighted row within the filtered list.
    pub selected: usize,
}

impl PickerState {
    /// Opens a picker with `current` highlighted when it is in the catalog.
    #[must_use]
    pub fn new(slot: CurrencySlot, catalog: &[Currency], current: &str) -> Self {
        Self {
            slot,
            query: String::new(),
            selected: position_of(catalog, current).unwrap_or(0),
        }
    }

    /// Catalog entries matching the current filter, in catalog order.
    #[must_use]
    pub fn filtered<'a>(&self, catalog: &'a [Currency]) -> Vec<&'a Currency> {
        catalog.iter().filter(|c| c.matches(&self.query)).collect()
    }

    /// Code of the highlighted entry, if the filter leaves any.
    #[must_use]
    pub fn selected_code(&self, catalog: &[Currency]) -> Option<String> {
        self.filtered(catalog)
            .get(self.selected)
            .map(|c| c.code.clone())
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Moves the highlight up, wrapping to the bottom.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            (self.selected - 1).min(len - 1)
        };
    }

    /// Moves the highlight down, wrapping to the top.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Currency picker for the From or To selector.
    CurrencyPicker(PickerState),
    /// Message/notification popup.
    Message(String),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the picker state if the currency picker is open.
    #[must_use]
    pub fn as_picker(&self) -> Option<&PickerState> {
        match self {
            Self::CurrencyPicker(picker) => Some(picker),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
