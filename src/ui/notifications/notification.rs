// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and
//! the `NotificationRequest` builder used to ask a manager for a new toast.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers are handed out by the owning [`Manager`](super::Manager), so
/// two managers never share hidden counter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level determines visual styling and the default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange). Also used for undo toasts.
    Warning,
    /// Error requiring attention (red, manual dismiss by default).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph rendered next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

/// Undo affordance attached to a deferred notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredAction {
    label: String,
}

impl DeferredAction {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the text shown on the undo button.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A request for a new notification, before the manager assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    severity: Severity,
    message: String,
    auto_dismiss: Option<Duration>,
}

impl NotificationRequest {
    /// Creates a request with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            auto_dismiss: None,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    ///
    /// `Duration::ZERO` keeps the notification until it is dismissed by hand.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.auto_dismiss = Some(duration);
        self
    }

    /// Returns the requested severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the requested message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-dismiss override, if any.
    #[must_use]
    pub fn auto_dismiss_override(&self) -> Option<Duration> {
        self.auto_dismiss
    }
}

/// A notification displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Zero means no automatic dismissal.
    auto_dismiss: Duration,
    deferred: Option<DeferredAction>,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn from_request(
        id: NotificationId,
        request: NotificationRequest,
        auto_dismiss: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            severity: request.severity,
            message: request.message,
            auto_dismiss,
            deferred: None,
            created_at,
        }
    }

    pub(crate) fn deferred(
        id: NotificationId,
        message: String,
        action: DeferredAction,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            severity: Severity::Warning,
            message,
            auto_dismiss: Duration::ZERO,
            deferred: Some(action),
            created_at,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-dismiss duration (`Duration::ZERO` when disabled).
    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        self.auto_dismiss
    }

    /// Returns the undo affordance, if this notification guards a deferred action.
    #[must_use]
    pub fn deferred_action(&self) -> Option<&DeferredAction> {
        self.deferred.as_ref()
    }

    /// Returns whether this notification guards a deferred action.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        self.deferred.is_some()
    }

    /// Returns when this notification was added.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
