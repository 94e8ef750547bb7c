// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is both the notification store and the deferred-action
//! scheduler. It owns three tables that always change together:
//!
//! - the visible notifications, in insertion order;
//! - one timer per notification at most (auto-dismiss or deferred confirm);
//! - the pending deferred actions, keyed by notification id.
//!
//! Time only moves when the caller feeds it an `Instant` through [`Manager::tick`],
//! which keeps the whole lifecycle deterministic under test.
//!
//! Callbacks attached to deferred actions produce a value of type `M`. Plain
//! callers use `M = ()` and side-effecting closures; the iced shell uses its
//! own `Message` type so that confirm/undo turn into follow-up messages.

use super::notification::{
    DeferredAction, Notification, NotificationId, NotificationRequest, Severity,
};
use super::pending::PendingAction;
use super::settings::NotificationSettings;
use super::timer::{TimerKind, TimerTable};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// Cancel the deferred action guarded by this notification (undo button).
    Undo(NotificationId),
    /// Advance timers to the given instant.
    Tick(Instant),
}

/// Outcome of [`Manager::schedule_deferred`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<M> {
    /// Id of the undo toast.
    pub id: NotificationId,
    /// Output of the confirm callback when the undo window was zero and the
    /// action confirmed on the spot. No toast is shown in that case.
    pub confirmed: Option<M>,
}

/// Owns visible notifications, their timers and pending deferred actions.
pub struct Manager<M = ()> {
    notifications: Vec<Notification>,
    timers: TimerTable,
    pending: HashMap<NotificationId, PendingAction<M>>,
    next_id: u64,
    settings: NotificationSettings,
}

impl<M> Default for Manager<M> {
    fn default() -> Self {
        Self::with_settings(NotificationSettings::default())
    }
}

impl<M> fmt::Debug for Manager<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("notifications", &self.notifications)
            .field("timers", &self.timers.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<M> Manager<M> {
    /// Creates a new empty notification manager with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty manager with the given timings.
    #[must_use]
    pub fn with_settings(settings: NotificationSettings) -> Self {
        Self {
            notifications: Vec::new(),
            timers: TimerTable::new(),
            pending: HashMap::new(),
            next_id: 0,
            settings,
        }
    }

    /// Returns the active timings.
    #[must_use]
    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Replaces the timings used for notifications added from now on.
    pub fn set_settings(&mut self, settings: NotificationSettings) {
        self.settings = settings;
    }

    /// Adds a notification, starting its auto-dismiss timer now.
    pub fn add(&mut self, request: NotificationRequest) -> NotificationId {
        self.add_at(request, Instant::now())
    }

    /// Adds a notification as if at `now`.
    ///
    /// The returned id can be passed to [`Manager::remove`] later. A non-zero
    /// auto-dismiss duration (the request's override, otherwise the severity
    /// default) arms a removal timer. A duration too large to represent as a
    /// deadline leaves the notification up until it is dismissed.
    pub fn add_at(&mut self, request: NotificationRequest, now: Instant) -> NotificationId {
        let id = self.allocate_id();
        let auto_dismiss = request
            .auto_dismiss_override()
            .unwrap_or_else(|| self.settings.auto_dismiss_for(request.severity()));

        match request.severity() {
            Severity::Warning => tracing::warn!(%id, text = request.message(), "notification"),
            Severity::Error => tracing::error!(%id, text = request.message(), "notification"),
            Severity::Success | Severity::Info => {
                tracing::debug!(%id, text = request.message(), "notification");
            }
        }

        self.notifications
            .push(Notification::from_request(id, request, auto_dismiss, now));

        if !auto_dismiss.is_zero() {
            match now.checked_add(auto_dismiss) {
                Some(deadline) => {
                    self.timers.arm(id, TimerKind::AutoDismiss, deadline);
                }
                None => {
                    tracing::warn!(%id, duration = ?auto_dismiss, "auto-dismiss out of range, not armed");
                }
            }
        }

        id
    }

    /// Shows an undo toast and confirms the action once `duration` elapses.
    ///
    /// Exactly one of `on_undo` and `on_confirm` runs, or neither if the
    /// notification is removed through [`Manager::remove`] or [`Manager::clear`].
    pub fn schedule_deferred<U, C>(
        &mut self,
        message: impl Into<String>,
        on_undo: U,
        on_confirm: C,
        duration: Duration,
    ) -> Scheduled<M>
    where
        U: FnOnce() -> M + 'static,
        C: FnOnce() -> M + 'static,
    {
        self.schedule_deferred_at(message, on_undo, on_confirm, duration, Instant::now())
    }

    /// Same as [`Manager::schedule_deferred`], starting the window at `now`.
    ///
    /// A zero `duration` runs `on_confirm` before returning and shows no
    /// toast; its output is in [`Scheduled::confirmed`]. A `duration` too large
    /// to represent as a deadline never confirms: the action waits for undo or
    /// removal.
    pub fn schedule_deferred_at<U, C>(
        &mut self,
        message: impl Into<String>,
        on_undo: U,
        on_confirm: C,
        duration: Duration,
        now: Instant,
    ) -> Scheduled<M>
    where
        U: FnOnce() -> M + 'static,
        C: FnOnce() -> M + 'static,
    {
        let id = self.allocate_id();
        let message = message.into();
        tracing::info!(
            %id,
            text = %message,
            window = ?duration,
            "deferred action scheduled"
        );

        let mut action = PendingAction::new(on_undo, on_confirm);
        if duration.is_zero() {
            let confirmed = action.confirm();
            tracing::info!(%id, "deferred action confirmed without undo window");
            return Scheduled { id, confirmed };
        }

        self.notifications.push(Notification::deferred(
            id,
            message,
            DeferredAction::new(self.settings.undo_label.clone()),
            now,
        ));
        match now.checked_add(duration) {
            Some(deadline) => {
                self.timers.arm(id, TimerKind::DeferredConfirm, deadline);
            }
            None => {
                tracing::warn!(%id, window = ?duration, "undo window out of range, confirm not armed");
            }
        }
        self.pending.insert(id, action);

        Scheduled {
            id,
            confirmed: None,
        }
    }

    /// Cancels a pending deferred action: runs its undo callback and removes
    /// the notification.
    ///
    /// Returns `None` if the action already resolved (double click, expired,
    /// removed) or `id` never guarded one.
    pub fn undo(&mut self, id: NotificationId) -> Option<M> {
        let mut action = self.pending.remove(&id)?;
        self.timers.disarm(id);
        let output = action.undo();
        tracing::info!(%id, state = ?action.state(), "deferred action cancelled");
        self.remove(id);
        output
    }

    /// Removes a notification by its ID.
    ///
    /// Any timer is disarmed and any pending deferred action is suppressed, so
    /// neither of its callbacks will ever run. Returns `true` if the
    /// notification was present; removing an absent id is a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.timers.disarm(id);

        if let Some(mut action) = self.pending.remove(&id) {
            if action.suppress() {
                tracing::info!(%id, "deferred action suppressed by removal");
            }
        }

        if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
            self.notifications.remove(pos);
            true
        } else {
            false
        }
    }

    /// Fires every timer due at `now`.
    ///
    /// Auto-dismissed notifications disappear silently. Deferred actions whose
    /// window elapsed run their confirm callback, then lose their notification.
    /// Returns the confirm outputs in firing order.
    pub fn tick(&mut self, now: Instant) -> Vec<M> {
        let mut outputs = Vec::new();

        for (id, kind) in self.timers.take_expired(now) {
            match kind {
                TimerKind::AutoDismiss => {
                    tracing::debug!(%id, "notification auto-dismissed");
                }
                TimerKind::DeferredConfirm => {
                    if let Some(mut action) = self.pending.remove(&id) {
                        if let Some(output) = action.confirm() {
                            outputs.push(output);
                        }
                        tracing::info!(%id, state = ?action.state(), "deferred action confirmed");
                    }
                }
            }
            self.remove(id);
        }

        outputs
    }

    /// Handles a notification message, returning callback outputs.
    pub fn handle_message(&mut self, message: &Message) -> Vec<M> {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
                Vec::new()
            }
            Message::Undo(id) => self.undo(*id).into_iter().collect(),
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Removes every notification, suppressing all pending deferred actions.
    pub fn clear(&mut self) {
        for (id, mut action) in self.pending.drain() {
            if action.suppress() {
                tracing::info!(%id, "deferred action suppressed by clear");
            }
        }
        self.timers.clear();
        self.notifications.clear();
    }

    /// Returns the notifications in the order they were added.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Returns the notification with the given id, if still present.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Returns the number of notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Returns whether the manager holds no notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns whether there are any notifications.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Returns whether any timer is armed (the tick subscription is needed).
    #[must_use]
    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Returns the number of unresolved deferred actions.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether `id` guards an unresolved deferred action.
    #[must_use]
    pub fn is_pending(&self, id: NotificationId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Returns when the timer of `id` expires, if one is armed.
    #[must_use]
    pub fn deadline(&self, id: NotificationId) -> Option<Instant> {
        self.timers.get(id).map(|timer| timer.deadline)
    }

    /// Returns which kind of timer is armed for `id`, if any.
    #[must_use]
    pub fn timer_kind(&self, id: NotificationId) -> Option<TimerKind> {
        self.timers.get(id).map(|timer| timer.kind)
    }

    /// Returns the share of the timer window still left at `now`, in `0.0..=1.0`.
    ///
    /// Only meant for countdown rendering.
    #[must_use]
    pub fn remaining_fraction(&self, id: NotificationId, now: Instant) -> Option<f32> {
        let deadline = self.deadline(id)?;
        let created_at = self.get(id)?.created_at();

        let total = deadline.saturating_duration_since(created_at);
        if total.is_zero() {
            return Some(0.0);
        }
        let remaining = deadline.saturating_duration_since(now);
        Some((remaining.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0))
    }

    fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }
}
