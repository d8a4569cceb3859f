//! Command execution and input handling.
//!
//! Keyboard input is mapped to commands, and commands either edit UI state
//! directly or are turned into converter events via [`App::dispatch`].

use crossterm::event::KeyEvent;

use super::{App, ConverterEvent, CurrencySlot, PopupState, platform::clipboard};
use crate::commands::{AppCommand, InputContext, map_key};

/// Ticks a toast stays visible.
const TOAST_TICKS: u8 = 20;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    ///
    /// Help takes precedence over popups, popups over the form.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }

        match &self.ui.popup_state {
            PopupState::CurrencyPicker(_) => InputContext::CurrencyPicker,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => match self.ui.focus.slot() {
                Some(_) => InputContext::CurrencySelect,
                None => InputContext::AmountInput,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.dispatch(ConverterEvent::RefreshRequested);
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            // === Form Navigation ===
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
            }
            AppCommand::CycleFocusBack => {
                self.ui.cycle_focus_back();
            }

            // === Converter Actions ===
            AppCommand::TypeChar(c) => self.type_char(c),
            AppCommand::Backspace => self.backspace(),
            AppCommand::Swap => {
                self.dispatch(ConverterEvent::Swapped);
            }
            AppCommand::CopyResult => self.copy_result(),
            AppCommand::PreviousCurrency => self.step_currency(false),
            AppCommand::NextCurrency => self.step_currency(true),
            AppCommand::OpenPicker => self.open_picker(),

            // === Currency Picker ===
            AppCommand::PickerUp | AppCommand::PickerDown => {
                let catalog = self.converter.currencies();
                if let Some(picker) = self.ui.picker_mut() {
                    let len = picker.filtered(catalog).len();
                    if command == AppCommand::PickerUp {
                        picker.move_up(len);
                    } else {
                        picker.move_down(len);
                    }
                }
            }
            AppCommand::PickerSelect => self.select_from_picker(),

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Text Input
    // ========================================================================

    fn type_char(&mut self, c: char) {
        if let Some(picker) = self.ui.picker_mut() {
            picker.push_char(c);
            return;
        }

        let mut amount = self.converter.amount().to_string();
        amount.push(c);
        self.dispatch(ConverterEvent::AmountChanged(amount));
    }

    fn backspace(&mut self) {
        if let Some(picker) = self.ui.picker_mut() {
            picker.backspace();
            return;
        }

        let mut amount = self.converter.amount().to_string();
        if amount.pop().is_some() {
            self.dispatch(ConverterEvent::AmountChanged(amount));
        }
    }

    // ========================================================================
    // Currency Selection
    // ========================================================================

    fn step_currency(&mut self, forward: bool) {
        let Some(slot) = self.ui.focus.slot() else {
            return;
        };
        if let Some(code) = self.converter.adjacent_code(slot, forward) {
            self.select_currency(slot, code);
        }
    }

    fn open_picker(&mut self) {
        let Some(slot) = self.ui.focus.slot() else {
            return;
        };

        if self.converter.currencies().is_empty() {
            self.ui.show_toast("Currencies are still loading", TOAST_TICKS);
            return;
        }

        self.ui.open_picker(
            slot,
            self.converter.currencies(),
            self.converter.code_in(slot),
        );
    }

    fn select_from_picker(&mut self) {
        let Some(picker) = self.ui.popup_state.as_picker() else {
            return;
        };
        let slot = picker.slot;
        let Some(code) = picker.selected_code(self.converter.currencies()) else {
            return;
        };

        self.ui.dismiss_popup();
        self.select_currency(slot, code);
    }

    pub(crate) fn select_currency(&mut self, slot: CurrencySlot, code: String) {
        let event = match slot {
            CurrencySlot::From => ConverterEvent::FromChanged(code),
            CurrencySlot::To => ConverterEvent::ToChanged(code),
        };
        self.dispatch(event);
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    fn copy_result(&mut self) {
        let line = self.converter.conversion_line();
        match clipboard::copy_text(&line) {
            Ok(()) => {
                self.ui
                    .show_toast(format!("[+] Copied: {line}"), TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.ui.show_toast("[x] Failed to copy", TOAST_TICKS);
            }
        }
    }
}
