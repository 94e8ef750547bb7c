// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display durations and the undo window
//! - **Ticks**: Timer resolution of the notification subscription
//! - **Logging**: Default log filter

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Display time of success toasts (milliseconds).
pub const DEFAULT_SUCCESS_DISMISS_MS: u64 = 3_000;

/// Display time of info toasts (milliseconds).
pub const DEFAULT_INFO_DISMISS_MS: u64 = 3_000;

/// Display time of warning toasts (milliseconds).
pub const DEFAULT_WARNING_DISMISS_MS: u64 = 5_000;

/// Display time of error toasts; zero means manual dismiss.
pub const DEFAULT_ERROR_DISMISS_MS: u64 = 0;

/// Time the user has to undo a destructive action (milliseconds).
pub const DEFAULT_UNDO_WINDOW_MS: u64 = 5_000;

/// Upper bound for any configured notification duration (milliseconds).
pub const MAX_NOTIFICATION_MS: u64 = 60_000;

/// Label of the undo button on deferred toasts.
pub const DEFAULT_UNDO_LABEL: &str = "Undo";

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the tick subscription that drives notification timers.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SUCCESS_DISMISS_MS <= MAX_NOTIFICATION_MS);
    assert!(DEFAULT_INFO_DISMISS_MS <= MAX_NOTIFICATION_MS);
    assert!(DEFAULT_WARNING_DISMISS_MS <= MAX_NOTIFICATION_MS);
    assert!(DEFAULT_ERROR_DISMISS_MS <= MAX_NOTIFICATION_MS);
    assert!(DEFAULT_UNDO_WINDOW_MS > 0);
    assert!(DEFAULT_UNDO_WINDOW_MS <= MAX_NOTIFICATION_MS);

    // Ticks must be fine-grained enough to resolve the shortest toast
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_SUCCESS_DISMISS_MS);
};
