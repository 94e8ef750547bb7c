// SPDX-License-Identifier: MPL-2.0
//! Toast notification system with deferred undo.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction. Destructive actions
//! use a deferred notification instead: the toast offers an undo button and
//! the action is only confirmed once its window elapses.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `NotificationRequest` and `Severity`
//! - [`manager`] - `Manager`, the store and deferred-action scheduler
//! - [`toast`] - Toast widget rendering the manager's notifications
//!
//! # Usage
//!
//! ```ignore
//! use chantier::ui::notifications::{Manager, NotificationRequest};
//! use std::time::{Duration, Instant};
//!
//! let mut manager: Manager = Manager::new();
//! manager.add(NotificationRequest::success("Site saved"));
//!
//! let scheduled = manager.schedule_deferred(
//!     "Site deleted",
//!     || println!("restored"),
//!     || println!("deleted for good"),
//!     Duration::from_secs(5),
//! );
//! manager.undo(scheduled.id);
//!
//! // Driven by the application's tick subscription:
//! manager.tick(Instant::now());
//! ```

mod manager;
mod notification;
mod pending;
mod settings;
mod timer;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Scheduled};
pub use notification::{
    DeferredAction, Notification, NotificationId, NotificationRequest, Severity,
};
pub use settings::NotificationSettings;
pub use timer::TimerKind;
pub use toast::Toast;
