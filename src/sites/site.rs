// SPDX-License-Identifier: MPL-2.0
//! Construction-site records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a site, as stored in `sites.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(u32);

impl SiteId {
    #[must_use]
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteStatus {
    #[default]
    Planned,
    Active,
    Suspended,
    Completed,
}

impl SiteStatus {
    /// Cycles Planned -> Active -> Suspended -> Completed -> Planned.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SiteStatus::Planned => SiteStatus::Active,
            SiteStatus::Active => SiteStatus::Suspended,
            SiteStatus::Suspended => SiteStatus::Completed,
            SiteStatus::Completed => SiteStatus::Planned,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SiteStatus::Planned => "Planned",
            SiteStatus::Active => "Active",
            SiteStatus::Suspended => "Suspended",
            SiteStatus::Completed => "Completed",
        }
    }
}

/// A construction site ("chantier").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub status: SiteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl Site {
    pub fn new(id: SiteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: String::new(),
            status: SiteStatus::default(),
            start_date: None,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SiteStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycle_returns_to_start() {
        let mut status = SiteStatus::Planned;
        for _ in 0..4 {
            status = status.next();
        }
        assert_eq!(status, SiteStatus::Planned);
    }

    #[test]
    fn site_parses_from_toml_with_defaults() {
        let site: Site = toml::from_str(
            r#"
            id = 12
            name = "Groupe scolaire Jean Moulin"
            start_date = "2026-03-02"
            "#,
        )
        .expect("site should parse");

        assert_eq!(site.id, SiteId::new(12));
        assert_eq!(site.status, SiteStatus::Planned);
        assert!(site.city.is_empty());
        assert_eq!(site.start_date, NaiveDate::from_ymd_opt(2026, 3, 2));
    }

    #[test]
    fn status_uses_kebab_case_names() {
        let site: Site = toml::from_str(
            r#"
            id = 1
            name = "Dépôt"
            status = "suspended"
            "#,
        )
        .expect("site should parse");
        assert_eq!(site.status, SiteStatus::Suspended);
    }
}
