// SPDX-License-Identifier: MPL-2.0
//! Writing preferences and the site list to disk.

use super::Message;
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::sites::{save_sites, Site};
use iced::Task;
use std::path::{Path, PathBuf};

/// Saves the site list off the UI thread and maps the outcome to a message.
///
/// Without a path the list lives in memory only and the save trivially
/// succeeds.
pub fn persist_sites<F>(path: Option<&Path>, sites: Vec<Site>, on_done: F) -> Task<Message>
where
    F: FnOnce(Result<()>) -> Message + Send + 'static,
{
    let Some(path) = path.map(PathBuf::from) else {
        return Task::done(on_done(Ok(())));
    };

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || save_sites(&path, &sites))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        on_done,
    )
}

/// Persists user preferences to `settings.toml`.
///
/// Skipped under test so unit tests never touch the real config directory.
pub fn persist_preferences(config: &Config) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        tracing::error!(%error, "failed to save config");
    }
}
