// SPDX-License-Identifier: MPL-2.0
//! Per-version parameter sets.
//!
//! Both prototype versions run the same state machines; they differ only in
//! the mode set, timing constants, layout deltas and whether the layout
//! shift and tab highlight decoupling are enabled.

use super::mode::{Mode, Version};
use std::time::Duration;

const MODES_A: [Mode; 5] = [Mode::Barcode, Mode::Food, Mode::Auto, Mode::Recipe, Mode::Menu];
const MODES_B: [Mode; 4] = [Mode::Barcode, Mode::Food, Mode::Auto, Mode::Recipe];

/// Durations of every timed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Blur-in and blur-out ramp of a mode switch (also the layout shift).
    pub blur: Duration,
    /// Shutter flash ramp up to peak.
    pub flash_in: Duration,
    /// Shutter flash fade-out after peak.
    pub flash_out: Duration,
    /// One revolution of the loading spinner.
    pub spinner_period: Duration,
    /// Loading phase in barcode mode, measured from the flash peak.
    pub loading_barcode: Duration,
    /// Loading phase in every other mode, measured from the flash peak.
    pub loading_default: Duration,
    /// Result drawer slide-in.
    pub drawer_open: Duration,
    /// Result drawer slide-out.
    pub drawer_close: Duration,
    /// Search sheet slide when entering or leaving barcode mode.
    pub sheet_slide: Duration,
}

impl Timing {
    /// Loading phase length for the given committed mode.
    #[must_use]
    pub fn loading_delay(&self, mode: Mode) -> Duration {
        if mode.is_barcode() {
            self.loading_barcode
        } else {
            self.loading_default
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            blur: Duration::from_millis(350),
            flash_in: Duration::from_millis(50),
            flash_out: Duration::from_millis(150),
            spinner_period: Duration::from_millis(1000),
            loading_barcode: Duration::from_millis(500),
            loading_default: Duration::from_millis(1000),
            drawer_open: Duration::from_millis(350),
            drawer_close: Duration::from_millis(300),
            sheet_slide: Duration::from_millis(400),
        }
    }
}

/// Blur and dimming applied to the camera preview at full blur progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurCurve {
    pub max_blur_px: f32,
    pub opacity_drop: f32,
}

impl Default for BlurCurve {
    fn default() -> Self {
        Self {
            max_blur_px: 4.0,
            opacity_drop: 0.15,
        }
    }
}

/// Control positions (top offsets in px) outside and inside barcode mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutShift {
    pub gallery_top: (f32, f32),
    pub pill_top: (f32, f32),
}

/// Complete configuration of one prototype version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionProfile {
    pub version: Version,
    pub modes: &'static [Mode],
    pub initial_mode: Mode,
    pub timing: Timing,
    pub blur: BlurCurve,
    /// Secondary transition that runs with the blur-in when entering or
    /// leaving barcode mode. `None` disables it.
    pub layout_shift: Option<LayoutShift>,
    /// Whether the tab highlight moves at request time instead of at commit.
    pub decoupled_highlight: bool,
    /// Height of the search sheet, i.e. its off-screen offset.
    pub sheet_height: f32,
}

impl VersionProfile {
    /// The original five-mode layout.
    #[must_use]
    pub fn version_a() -> Self {
        Self {
            version: Version::A,
            modes: &MODES_A,
            initial_mode: Mode::Auto,
            timing: Timing::default(),
            blur: BlurCurve::default(),
            layout_shift: None,
            decoupled_highlight: false,
            sheet_height: 200.0,
        }
    }

    /// The redesigned pill-tab layout without the menu mode.
    #[must_use]
    pub fn version_b() -> Self {
        Self {
            version: Version::B,
            modes: &MODES_B,
            initial_mode: Mode::Auto,
            timing: Timing::default(),
            blur: BlurCurve::default(),
            layout_shift: Some(LayoutShift {
                gallery_top: (149.0, 24.0),
                pill_top: (138.0, 16.0),
            }),
            decoupled_highlight: true,
            sheet_height: 130.0,
        }
    }

    #[must_use]
    pub fn for_version(version: Version) -> Self {
        match version {
            Version::A => Self::version_a(),
            Version::B => Self::version_b(),
        }
    }

    /// Returns true when `mode` belongs to this version's mode set.
    #[must_use]
    pub fn supports(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_a_has_five_modes_without_shift() {
        let profile = VersionProfile::version_a();
        assert_eq!(profile.modes.len(), 5);
        assert!(profile.supports(Mode::Menu));
        assert!(profile.layout_shift.is_none());
        assert!(!profile.decoupled_highlight);
    }

    #[test]
    fn version_b_drops_menu_and_enables_shift() {
        let profile = VersionProfile::version_b();
        assert_eq!(profile.modes, &[Mode::Barcode, Mode::Food, Mode::Auto, Mode::Recipe]);
        assert!(!profile.supports(Mode::Menu));
        assert!(profile.layout_shift.is_some());
        assert!(profile.decoupled_highlight);
    }

    #[test]
    fn initial_mode_is_supported_by_both_versions() {
        for version in Version::ALL {
            let profile = VersionProfile::for_version(version);
            assert!(profile.supports(profile.initial_mode));
            assert_eq!(profile.version, version);
        }
    }

    #[test]
    fn loading_delay_is_shorter_for_barcode() {
        let timing = Timing::default();
        assert_eq!(timing.loading_delay(Mode::Barcode), Duration::from_millis(500));
        assert_eq!(timing.loading_delay(Mode::Auto), Duration::from_millis(1000));
        assert_eq!(timing.loading_delay(Mode::Menu), Duration::from_millis(1000));
    }
}
