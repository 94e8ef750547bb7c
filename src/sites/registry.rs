// SPDX-License-Identifier: MPL-2.0
//! Ordered, in-memory list of sites with TOML persistence.
//!
//! Removal hands back a [`RemovedSite`] remembering where the site was, so an
//! optimistic delete can be rolled back to the exact same position. Until the
//! removal is committed the registry still persists the site.

use super::site::{Site, SiteId, SiteStatus};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk layout: a list of `[[site]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SiteFile {
    #[serde(default, rename = "site")]
    sites: Vec<Site>,
}

/// A site taken out of the registry, with its former position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedSite {
    pub index: usize,
    pub site: Site,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRegistry {
    sites: Vec<Site>,
    /// Taken but not yet committed, in removal order.
    pending_removals: Vec<RemovedSite>,
}

impl SiteRegistry {
    /// Builds a registry, rejecting duplicate ids.
    pub fn new(sites: Vec<Site>) -> Result<Self> {
        let mut seen = HashSet::new();
        for site in &sites {
            if !seen.insert(site.id) {
                return Err(Error::Data(format!("duplicate site id {}", site.id)));
            }
        }
        Ok(Self {
            sites,
            pending_removals: Vec::new(),
        })
    }

    /// Loads sites from a TOML file. A missing file is an empty registry.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let file: SiteFile =
            toml::from_str(&content).map_err(|e| Error::Data(e.to_string()))?;
        Self::new(file.sites)
    }

    /// Writes [`SiteRegistry::snapshot`] to `path`.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        save_sites(path, &self.snapshot())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter()
    }

    #[must_use]
    pub fn get(&self, id: SiteId) -> Option<&Site> {
        self.sites.iter().find(|site| site.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Returns the sites to persist, e.g. off the UI thread.
    ///
    /// Sites whose removal has not been committed are put back at their
    /// former positions.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Site> {
        let mut sites = self.sites.clone();
        for removed in self.pending_removals.iter().rev() {
            let index = removed.index.min(sites.len());
            sites.insert(index, removed.site.clone());
        }
        sites
    }

    /// Removes a site from view, remembering its position.
    ///
    /// The site keeps being persisted until [`SiteRegistry::commit_removal`].
    pub fn take(&mut self, id: SiteId) -> Option<RemovedSite> {
        let index = self.sites.iter().position(|site| site.id == id)?;
        let site = self.sites.remove(index);
        let removed = RemovedSite { index, site };
        self.pending_removals.push(removed.clone());
        Some(removed)
    }

    /// Makes a removal final so the site is no longer persisted.
    ///
    /// Returns `false` if no removal of `id` was pending.
    pub fn commit_removal(&mut self, id: SiteId) -> bool {
        let before = self.pending_removals.len();
        self.pending_removals.retain(|removed| removed.site.id != id);
        self.pending_removals.len() != before
    }

    #[must_use]
    pub fn has_pending_removals(&self) -> bool {
        !self.pending_removals.is_empty()
    }

    /// Puts a removed site back where it was (or at the end if the list shrank).
    ///
    /// Returns `false`, leaving the registry untouched, if a site with the
    /// same id is already present.
    pub fn restore(&mut self, removed: RemovedSite) -> bool {
        self.pending_removals
            .retain(|pending| pending.site.id != removed.site.id);
        if self.get(removed.site.id).is_some() {
            return false;
        }
        let index = removed.index.min(self.sites.len());
        self.sites.insert(index, removed.site);
        true
    }

    /// Moves a site to its next status, returning the new one.
    pub fn advance_status(&mut self, id: SiteId) -> Option<SiteStatus> {
        let site = self.sites.iter_mut().find(|site| site.id == id)?;
        site.status = site.status.next();
        Some(site.status)
    }
}

/// Writes `sites` to `path` as `[[site]]` tables, creating parent directories.
pub fn save_sites(path: &Path, sites: &[Site]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = SiteFile {
        sites: sites.to_vec(),
    };
    let content = toml::to_string_pretty(&file).map_err(|e| Error::Data(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn registry() -> SiteRegistry {
        SiteRegistry::new(vec![
            Site::new(SiteId::new(1), "Les Tilleuls").with_city("Lyon"),
            Site::new(SiteId::new(2), "Pont de l'Arc").with_city("Aix"),
            Site::new(SiteId::new(3), "Halle Nord").with_city("Lille"),
        ])
        .expect("ids are unique")
    }

    fn ids(registry: &SiteRegistry) -> Vec<u32> {
        registry.iter().map(|site| site.id.value()).collect()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = SiteRegistry::new(vec![
            Site::new(SiteId::new(7), "A"),
            Site::new(SiteId::new(7), "B"),
        ]);
        assert!(matches!(result, Err(Error::Data(_))));
    }

    #[test]
    fn take_then_restore_keeps_position() {
        let mut registry = registry();
        let removed = registry.take(SiteId::new(2)).expect("site exists");

        assert_eq!(removed.index, 1);
        assert_eq!(ids(&registry), vec![1, 3]);

        assert!(registry.restore(removed));
        assert_eq!(ids(&registry), vec![1, 2, 3]);
    }

    #[test]
    fn restore_clamps_index_when_list_shrank() {
        let mut registry = registry();
        let last = registry.take(SiteId::new(3)).expect("site exists");
        registry.take(SiteId::new(2));

        assert!(registry.restore(last));
        assert_eq!(ids(&registry), vec![1, 3]);
    }

    #[test]
    fn restore_refuses_duplicates() {
        let mut registry = registry();
        let removed = registry.take(SiteId::new(1)).expect("site exists");
        assert!(registry.restore(removed.clone()));
        assert!(!registry.restore(removed));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn snapshot_keeps_uncommitted_removals_in_place() {
        let mut registry = registry();
        registry.take(SiteId::new(2));
        registry.take(SiteId::new(1));
        registry.advance_status(SiteId::new(3));

        assert_eq!(ids(&registry), vec![3]);
        let snapshot = registry.snapshot();
        let snapshot_ids: Vec<u32> = snapshot.iter().map(|site| site.id.value()).collect();
        assert_eq!(snapshot_ids, vec![1, 2, 3]);
        assert_eq!(snapshot[2].status, SiteStatus::Active);
    }

    #[test]
    fn committed_removal_leaves_snapshot() {
        let mut registry = registry();
        registry.take(SiteId::new(2));
        registry.take(SiteId::new(3));

        assert!(registry.commit_removal(SiteId::new(2)));
        assert!(!registry.commit_removal(SiteId::new(2)));

        let snapshot_ids: Vec<u32> =
            registry.snapshot().iter().map(|site| site.id.value()).collect();
        assert_eq!(snapshot_ids, vec![1, 3]);

        assert!(registry.commit_removal(SiteId::new(3)));
        assert!(!registry.has_pending_removals());
        assert_eq!(registry.snapshot(), registry.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn restore_clears_pending_removal() {
        let mut registry = registry();
        let removed = registry.take(SiteId::new(2)).expect("site exists");
        assert!(registry.has_pending_removals());

        assert!(registry.restore(removed));
        assert!(!registry.has_pending_removals());
        assert_eq!(registry.snapshot().len(), 3);
    }

    #[test]
    fn save_during_undo_window_still_writes_removed_site() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sites.toml");
        let mut registry = registry();
        registry.take(SiteId::new(1));

        registry.save_to_path(&path).expect("save should succeed");
        let loaded = SiteRegistry::load_from_path(&path).expect("load should succeed");

        assert_eq!(ids(&loaded), vec![1, 2, 3]);
    }

    #[test]
    fn take_unknown_site_returns_none() {
        let mut registry = registry();
        assert!(registry.take(SiteId::new(99)).is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn advance_status_cycles() {
        let mut registry = registry();
        assert_eq!(
            registry.advance_status(SiteId::new(1)),
            Some(SiteStatus::Active)
        );
        assert_eq!(registry.advance_status(SiteId::new(42)), None);
    }

    #[test]
    fn save_and_load_preserves_order_and_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("data").join("sites.toml");
        let mut original = registry();
        original.advance_status(SiteId::new(3));

        original.save_to_path(&path).expect("save should succeed");
        let loaded = SiteRegistry::load_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = SiteRegistry::load_from_path(&temp_dir.path().join("absent.toml"))
            .expect("missing file is not an error");
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_file_is_a_data_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sites.toml");
        fs::write(&path, "[[site]]\nname = 3\n").expect("write");

        assert!(matches!(
            SiteRegistry::load_from_path(&path),
            Err(Error::Data(_))
        ));
    }
}
