// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is a periodic tick that drives toast and alert
//! auto-dismissal plus the card entrance fade. It runs only while
//! something is actually animating or awaiting a deadline, so an idle
//! application schedules no work at all.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between deadline checks while anything is pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription, or none while idle.
pub fn create_tick_subscription(
    entrance_animating: bool,
    has_notifications: bool,
    has_alerts: bool,
) -> Subscription<Message> {
    if entrance_animating || has_notifications || has_alerts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
