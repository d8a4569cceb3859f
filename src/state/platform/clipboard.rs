//! Cross-platform clipboard access.
//!
//! On Linux the external tools are tried first, in order:
//! 1. `wl-copy` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//!
//! and the `arboard` crate is the fallback. External tools keep the copied
//! text available after the application exits. macOS and Windows use
//! `arboard` directly.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::platform::clipboard;
//!
//! clipboard::copy_text("92.00 EUR")?;
//! ```

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard backend could be opened.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The backend refused the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// External Linux tools and their arguments, in preference order.
#[cfg(target_os = "linux")]
const EXTERNAL_TOOLS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

// ============================================================================
// Clipboard Manager
// ============================================================================

/// Clipboard writer that picks the best backend for the platform.
#[derive(Debug)]
pub struct ClipboardManager {
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Creates a manager that prefers external tools on Linux.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Creates a manager that only uses `arboard`.
    #[must_use]
    pub fn arboard_only() -> Self {
        Self {
            prefer_external_tools: false,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no backend is available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        EXTERNAL_TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        // Close stdin so the tool sees EOF.
        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Copies text using the default clipboard manager.
///
/// # Errors
///
/// Returns an error if no backend is available or the copy fails.
pub fn copy_text(text: &str) -> ClipboardResult<()> {
    ClipboardManager::new().copy_text(text)
}

// ============================================================================
// Tests
// ============================================================================
