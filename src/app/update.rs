// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Wall-clock ticks are converted into animation time here: the gap since
//! the previous tick is capped, scaled by the playback speed and fed to the
//! shell. The core itself never reads a clock.

use super::config::{self, MAX_FRAME_DELTA};
use super::Message;
use crate::application::shell::AppShell;
use crate::ui::presentation::Presentation;
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable state the update handlers work on.
pub struct UpdateContext<'a> {
    pub shell: &'a mut AppShell<Presentation>,
    pub last_tick: &'a mut Option<Instant>,
    pub time_scale: f32,
    pub warning: &'a mut Option<String>,
}

/// Animation time elapsed between two ticks.
///
/// A tick without a predecessor yields zero. Gaps longer
/// than [`MAX_FRAME_DELTA`] are capped before scaling.
#[must_use]
pub fn frame_delta(last_tick: Option<Instant>, now: Instant, time_scale: f32) -> Duration {
    let Some(last) = last_tick else {
        return Duration::ZERO;
    };
    let elapsed = now.saturating_duration_since(last).min(MAX_FRAME_DELTA);
    elapsed.mul_f32(config::clamp_time_scale(time_scale))
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::SelectVersion(version) => {
            if ctx.shell.select_version(version) {
                *ctx.last_tick = None;
            }
        }
        Message::Tap(tap) => {
            let was_animating = ctx.shell.is_animating();
            ctx.shell.tap(tap);
            if !was_animating && ctx.shell.is_animating() {
                *ctx.last_tick = Some(Instant::now());
            }
        }
        Message::Tick(now) => handle_tick(ctx, now),
        Message::DismissWarning => {
            *ctx.warning = None;
        }
    }
    Task::none()
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    let dt = frame_delta(*ctx.last_tick, now, ctx.time_scale);
    ctx.shell.advance(dt);
    *ctx.last_tick = if ctx.shell.is_animating() {
        Some(now)
    } else {
        None
    };
}
