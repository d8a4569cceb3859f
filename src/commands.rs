//! Command pattern for key event handling.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], based on an
//! [`InputContext`] derived from the app state. Keeping the mapping pure makes
//! every binding testable without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The amount field has focus.
    AmountInput,
    /// A From/To selector has focus.
    CurrencySelect,
    /// The currency picker popup is open.
    CurrencyPicker,
    /// A message popup is shown.
    MessagePopup,
    /// The help overlay is shown.
    HelpPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Fetch the rates for the current base again.
    Refresh,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Close the current popup.
    Dismiss,

    // === Form Navigation ===
    /// Move focus to the next field.
    CycleFocus,
    /// Move focus to the previous field.
    CycleFocusBack,

    // === Converter Actions ===
    /// Type a character into the focused text input.
    TypeChar(char),
    /// Delete the last character of the focused text input.
    Backspace,
    /// Exchange the From and To currencies.
    Swap,
    /// Copy the conversion line to the clipboard.
    CopyResult,
    /// Select the previous currency in the focused selector.
    PreviousCurrency,
    /// Select the next currency in the focused selector.
    NextCurrency,
    /// Open the picker for the focused selector.
    OpenPicker,

    // === Currency Picker Actions ===
    /// Move the picker highlight up.
    PickerUp,
    /// Move the picker highlight down.
    PickerDown,
    /// Apply the highlighted currency and close the picker.
    PickerSelect,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if is_ctrl_c(&key) {
            return match context {
                InputContext::CurrencyPicker => AppCommand::Dismiss,
                _ => AppCommand::Quit,
            };
        }

        match context {
            InputContext::AmountInput => Self::map_amount_keys(key),
            InputContext::CurrencySelect => Self::map_currency_select_keys(key),
            InputContext::CurrencyPicker => Self::map_picker_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
            InputContext::HelpPopup => Self::map_help_popup_keys(key),
        }
    }

    /// Bindings shared by both form contexts.
    fn map_form_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('s') => AppCommand::Swap,
            KeyCode::Char('c') => AppCommand::CopyResult,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::BackTab => AppCommand::CycleFocusBack,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys while the amount field has focus.
    fn map_amount_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char(c) if is_amount_char(c) => AppCommand::TypeChar(c),
            KeyCode::Backspace => AppCommand::Backspace,
            _ => Self::map_form_keys(key),
        }
    }

    /// Maps keys while a currency selector has focus.
    fn map_currency_select_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppCommand::PreviousCurrency,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::NextCurrency,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::OpenPicker,
            _ => Self::map_form_keys(key),
        }
    }

    /// Maps keys in the currency picker popup.
    fn map_picker_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::PickerSelect,
            KeyCode::Up => AppCommand::PickerUp,
            KeyCode::Down => AppCommand::PickerDown,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the message popup.
    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the help overlay.
    fn map_help_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                AppCommand::ToggleHelp
            }
            _ => AppCommand::Noop,
        }
    }
}

/// Maps a key event using [`KeyMapper`].
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    KeyMapper::map_key(key, context)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Characters accepted by the numeric amount field.
const fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

// ============================================================================
// Tests
// ============================================================================
