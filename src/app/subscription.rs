// SPDX-License-Identifier: MPL-2.0
//! Frame tick subscription.
//!
//! The scan core is advanced by explicit time deltas, so the app only needs
//! periodic ticks while something is moving. Idle prototypes subscribe to
//! nothing.

use super::config::FRAME_INTERVAL;
use super::Message;
use iced::{time, Subscription};

/// Ticks every [`FRAME_INTERVAL`] while `is_animating`.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
