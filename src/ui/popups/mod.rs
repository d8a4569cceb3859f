//! Popup UI components for the lazyfx TUI.
//!
//! Popups are modal overlays that appear on top of the converter and take
//! the keyboard until dismissed.

pub mod currency_picker;
pub mod help;
pub mod message;

pub use currency_picker::render as render_currency_picker;
pub use help::render as render_help_popup;
pub use message::render as render_message_popup;
