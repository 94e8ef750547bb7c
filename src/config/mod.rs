// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast durations, undo window and undo label
//! - `[logging]` - Default log filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `CHANTIER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use chantier::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.notifications.undo_window_ms = Some(8_000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast timings. Every duration is in milliseconds; zero disables
/// auto-dismiss for that severity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_success_ms", skip_serializing_if = "Option::is_none")]
    pub success_ms: Option<u64>,

    #[serde(default = "default_info_ms", skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<u64>,

    #[serde(default = "default_warning_ms", skip_serializing_if = "Option::is_none")]
    pub warning_ms: Option<u64>,

    #[serde(default = "default_error_ms", skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<u64>,

    /// How long destructive actions stay undoable.
    #[serde(
        default = "default_undo_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub undo_window_ms: Option<u64>,

    /// Text of the undo button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undo_label: Option<String>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            success_ms: default_success_ms(),
            info_ms: default_info_ms(),
            warning_ms: default_warning_ms(),
            error_ms: default_error_ms(),
            undo_window_ms: default_undo_window_ms(),
            undo_label: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `"debug"`,
    /// `"chantier=trace"`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_success_ms() -> Option<u64> {
    Some(DEFAULT_SUCCESS_DISMISS_MS)
}

fn default_info_ms() -> Option<u64> {
    Some(DEFAULT_INFO_DISMISS_MS)
}

fn default_warning_ms() -> Option<u64> {
    Some(DEFAULT_WARNING_DISMISS_MS)
}

fn default_error_ms() -> Option<u64> {
    Some(DEFAULT_ERROR_DISMISS_MS)
}

fn default_undo_window_ms() -> Option<u64> {
    Some(DEFAULT_UNDO_WINDOW_MS)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "falling back to default settings"
                    );
                    return (
                        Config::default(),
                        Some(format!(
                            "Settings could not be read, defaults are used ({error})"
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
