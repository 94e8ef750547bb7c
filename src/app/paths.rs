// SPDX-License-Identifier: MPL-2.0
//! Where the desk keeps its files.
//!
//! Both directories resolve in the same order:
//! 1. explicit override passed to a `_with_override()` function (tests)
//! 2. CLI argument (`--config-dir`, `--data-dir`) registered with [`init_cli_overrides`]
//! 3. environment variable ([`ENV_CONFIG_DIR`], [`ENV_DATA_DIR`]) when non-empty
//! 4. platform directory from `dirs`, with [`APP_NAME`] appended
//!
//! `settings.toml` lives in the config directory, `sites.toml` in the data
//! directory.

use crate::sites::SITES_FILE;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const APP_NAME: &str = "Chantier";

pub const ENV_CONFIG_DIR: &str = "CHANTIER_CONFIG_DIR";

pub const ENV_DATA_DIR: &str = "CHANTIER_DATA_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the directories given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI directory overrides already initialized, ignoring");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => platform().map(|dir| dir.join(APP_NAME)),
    }
}

/// Directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

/// Directory holding the site list.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Default location of `sites.toml`, if a data directory can be determined.
pub fn default_sites_path() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(SITES_FILE))
}
