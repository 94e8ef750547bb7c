// SPDX-License-Identifier: MPL-2.0
//! Runtime notification timings derived from the `[notifications]` config section.

use super::notification::Severity;
use crate::config::{self, NotificationsConfig};
use std::time::Duration;

/// Resolved durations and labels used by the notification manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub success: Duration,
    pub info: Duration,
    pub warning: Duration,
    /// Zero keeps errors on screen until dismissed.
    pub error: Duration,
    /// Default undo window for deferred actions.
    pub undo_window: Duration,
    pub undo_label: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self::from_config(&NotificationsConfig::default())
    }
}

impl NotificationSettings {
    /// Builds settings from the config section, clamping every duration to
    /// [`config::MAX_NOTIFICATION_MS`] and falling back to defaults for
    /// missing fields.
    #[must_use]
    pub fn from_config(section: &NotificationsConfig) -> Self {
        let ms = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(config::MAX_NOTIFICATION_MS))
        };

        let undo_label = section
            .undo_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(config::DEFAULT_UNDO_LABEL)
            .to_string();

        Self {
            success: ms(section.success_ms, config::DEFAULT_SUCCESS_DISMISS_MS),
            info: ms(section.info_ms, config::DEFAULT_INFO_DISMISS_MS),
            warning: ms(section.warning_ms, config::DEFAULT_WARNING_DISMISS_MS),
            error: ms(section.error_ms, config::DEFAULT_ERROR_DISMISS_MS),
            undo_window: ms(section.undo_window_ms, config::DEFAULT_UNDO_WINDOW_MS),
            undo_label,
        }
    }

    /// Returns the auto-dismiss duration applied when a request has no override.
    #[must_use]
    pub fn auto_dismiss_for(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Success => self.success,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_constants() {
        let settings = NotificationSettings::default();
        assert_eq!(settings.success, Duration::from_secs(3));
        assert_eq!(settings.info, settings.success);
        assert_eq!(settings.warning, Duration::from_secs(5));
        assert_eq!(settings.error, Duration::ZERO);
        assert_eq!(settings.undo_window, Duration::from_secs(5));
        assert_eq!(settings.undo_label, "Undo");
    }

    #[test]
    fn errors_are_manual_dismiss_by_default() {
        let settings = NotificationSettings::default();
        assert!(settings.auto_dismiss_for(Severity::Error).is_zero());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let settings = NotificationSettings::default();
        assert!(
            settings.auto_dismiss_for(Severity::Warning)
                > settings.auto_dismiss_for(Severity::Success)
        );
    }

    #[test]
    fn oversized_values_are_clamped() {
        let section = NotificationsConfig {
            undo_window_ms: Some(u64::MAX),
            ..NotificationsConfig::default()
        };
        let settings = NotificationSettings::from_config(&section);
        assert_eq!(
            settings.undo_window,
            Duration::from_millis(config::MAX_NOTIFICATION_MS)
        );
    }

    #[test]
    fn blank_undo_label_falls_back_to_default() {
        let section = NotificationsConfig {
            undo_label: Some("   ".to_string()),
            ..NotificationsConfig::default()
        };
        assert_eq!(NotificationSettings::from_config(&section).undo_label, "Undo");
    }
}
