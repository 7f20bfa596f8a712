// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Float assertions come from `approx`, which handles the rounding that
//! `assert_eq!` cannot. Durations are written in milliseconds throughout the
//! transition tests, hence [`ms`].

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::time::Duration;

/// Tolerance for progress values that should land exactly on a keyframe.
pub const F32_EPSILON: f32 = 1e-6;

/// Shorthand for `Duration::from_millis`.
pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}
