// SPDX-License-Identifier: MPL-2.0
//! Construction sites managed by the desk.
//!
//! - [`Site`], [`SiteId`], [`SiteStatus`] - the record itself
//! - [`SiteRegistry`] - ordered list with removal/restore for undoable deletes
//! - [`save_sites`] - snapshot persistence usable from a blocking task

mod registry;
mod site;

pub use registry::{save_sites, RemovedSite, SiteRegistry};
pub use site::{Site, SiteId, SiteStatus};

/// File name of the site list inside the data directory.
pub const SITES_FILE: &str = "sites.toml";
