//! Platform-specific path helpers for configuration and data directories.
//!
//! # Directory Locations
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/lazyfx` | `~/.local/share/lazyfx` |
//! | macOS | `~/Library/Application Support/lazyfx` | Same as config |
//! | Windows | `%APPDATA%/lazyfx` | `%APPDATA%/lazyfx` |
//!
//! # Example
//!
//! ```ignore
//! use crate::state::platform::paths::AppPaths;
//!
//! let paths = AppPaths::new();
//! if let Ok(log_file) = paths.log_file() {
//!     println!("Logging to {}", log_file.display());
//! }
//! ```

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "lazyfx";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log file name.
pub const LOG_FILE_NAME: &str = "lazyfx.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves the application's config and data locations.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    /// Creates a new `AppPaths` instance with the default application name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    // ========================================================================
    // Directory Methods
    // ========================================================================

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    // ========================================================================
    // File Methods
    // ========================================================================

    /// Path of the JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        let mut path = self.config_dir()?;
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Path of the diagnostic log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        let mut path = self.data_dir()?;
        path.push(LOG_FILE_NAME);
        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
