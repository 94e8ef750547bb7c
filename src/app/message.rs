// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::sites::{RemovedSite, SiteId, SiteStatus};
use crate::ui::notifications::NotificationMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    Tick(Instant), // Periodic tick driving notification timers
    /// Delete button on a site row.
    DeleteSite(SiteId),
    /// Emitted by the undo callback of a deletion.
    RestoreSite(RemovedSite),
    /// Emitted by the confirm callback once the undo window elapsed.
    PersistDeletion(RemovedSite),
    /// Result of writing the site list after a confirmed deletion.
    DeletionPersisted {
        removed: RemovedSite,
        result: Result<(), Error>,
    },
    AdvanceStatus(SiteId),
    StatusPersisted {
        id: SiteId,
        status: SiteStatus,
        result: Result<(), Error>,
    },
    ToggleTheme,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override.
    /// Takes precedence over `CHANTIER_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHANTIER_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Explicit site list file, bypassing the data directory.
    pub sites_path: Option<String>,
}
