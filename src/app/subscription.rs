// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick driving notification timers.
///
/// Only runs while a timer is armed, so an idle desk does not wake up.
pub fn create_tick_subscription(has_timers: bool) -> Subscription<Message> {
    if has_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
