// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Playback**: Animation time scale bounds
//! - **Frames**: Tick interval while a transition runs

use std::time::Duration;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default animation playback speed (1.0 = reference timing).
pub const DEFAULT_TIME_SCALE: f32 = 1.0;

/// Slowest playback, useful for inspecting a transition frame by frame.
pub const MIN_TIME_SCALE: f32 = 0.1;

/// Fastest playback.
pub const MAX_TIME_SCALE: f32 = 4.0;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Interval of the animation tick subscription (about 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest wall-clock gap fed to the transition core in one tick, so a
/// stalled window does not skip a whole sequence.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_bounds_are_ordered() {
        assert!(MIN_TIME_SCALE < DEFAULT_TIME_SCALE);
        assert!(DEFAULT_TIME_SCALE < MAX_TIME_SCALE);
    }

    #[test]
    fn frame_delta_covers_frame_interval() {
        assert!(MAX_FRAME_DELTA >= FRAME_INTERVAL);
    }
}
