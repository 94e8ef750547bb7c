// SPDX-License-Identifier: MPL-2.0
//! Deadline table driving auto-dismiss and deferred confirmation.
//!
//! Timers are plain deadlines keyed by notification id. The application's
//! periodic `Tick(Instant)` drains whatever has expired, so the table never
//! owns a callback and a notification can never hold two timers at once.

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::Instant;

/// What happens when a timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Remove the notification, nothing else.
    AutoDismiss,
    /// Run the pending action's confirm callback, then remove the notification.
    DeferredConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timer {
    pub(crate) deadline: Instant,
    pub(crate) kind: TimerKind,
}

#[derive(Debug, Default)]
pub(crate) struct TimerTable {
    timers: HashMap<NotificationId, Timer>,
}

impl TimerTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arms a timer for `id`, returning the one it replaced, if any.
    pub(crate) fn arm(
        &mut self,
        id: NotificationId,
        kind: TimerKind,
        deadline: Instant,
    ) -> Option<Timer> {
        self.timers.insert(id, Timer { deadline, kind })
    }

    pub(crate) fn disarm(&mut self, id: NotificationId) -> Option<Timer> {
        self.timers.remove(&id)
    }

    pub(crate) fn get(&self, id: NotificationId) -> Option<Timer> {
        self.timers.get(&id).copied()
    }

    /// Removes and returns every timer with `deadline <= now`, earliest first.
    ///
    /// Ties are broken by id so that same-deadline timers fire in creation order.
    pub(crate) fn take_expired(&mut self, now: Instant) -> Vec<(NotificationId, TimerKind)> {
        let mut expired: Vec<(Instant, NotificationId, TimerKind)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (timer.deadline, *id, timer.kind))
            .collect();
        expired.sort_by_key(|(deadline, id, _)| (*deadline, *id));

        for (_, id, _) in &expired {
            self.timers.remove(id);
        }

        expired
            .into_iter()
            .map(|(_, id, kind)| (id, kind))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.timers.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.timers.clear();
    }
}
