// SPDX-License-Identifier: MPL-2.0
//! Lower search sheet shown while barcode mode is committed.

use super::clock::{Target, TransitionClock};
use super::event::ScanEvent;
use super::mode::{Mode, Step};
use super::profile::VersionProfile;
use super::progress::Progress;
use std::time::Duration;

/// Visibility and content of the search sheet.
///
/// `scanned` switches the content from the search affordance to the scanned
/// item preview card and is only ever true while the committed mode is
/// barcode and the step is at least `Detected`.
#[derive(Debug, Clone)]
pub struct SheetState {
    visible: bool,
    scanned: bool,
    slide: TransitionClock<()>,
    slide_duration: Duration,
}

impl SheetState {
    #[must_use]
    pub fn new(profile: &VersionProfile) -> Self {
        let visible = profile.initial_mode.is_barcode();
        let rest = if visible { Target::One } else { Target::Zero };
        Self {
            visible,
            scanned: false,
            slide: TransitionClock::settled(rest),
            slide_duration: profile.timing.sheet_slide,
        }
    }

    /// Brings visibility and content in line with the committed mode and
    /// step. Starts a slide when visibility flips.
    pub fn sync(&mut self, mode: Mode, step: Step, events: &mut Vec<ScanEvent>) {
        let visible = mode.is_barcode();
        if visible != self.visible {
            self.visible = visible;
            let target = if visible { Target::One } else { Target::Zero };
            self.slide.run(target, self.slide_duration, None);
            events.push(ScanEvent::SheetVisibility { visible });
        }

        let scanned = mode.is_barcode() && step >= Step::Detected;
        if scanned != self.scanned {
            self.scanned = scanned;
            events.push(ScanEvent::SheetScanned { scanned });
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.slide.advance(dt);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_running()
    }

    /// Slide progress: 0 is off-screen below, 1 is fully in place.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.slide.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_slides_in_with_barcode() {
        let mut sheet = SheetState::new(&VersionProfile::version_a());
        let mut events = Vec::new();
        assert!(!sheet.is_visible());

        sheet.sync(Mode::Barcode, Step::Scanning, &mut events);
        assert!(sheet.is_visible());
        assert!(sheet.is_animating());
        sheet.advance(Duration::from_millis(400));
        assert_eq!(sheet.progress(), Progress::ONE);
        assert_eq!(events, vec![ScanEvent::SheetVisibility { visible: true }]);
    }

    #[test]
    fn scanned_requires_barcode_and_detection() {
        let mut sheet = SheetState::new(&VersionProfile::version_b());
        let mut events = Vec::new();

        sheet.sync(Mode::Auto, Step::Detected, &mut events);
        assert!(!sheet.is_scanned());

        sheet.sync(Mode::Barcode, Step::Scanning, &mut events);
        assert!(!sheet.is_scanned());

        sheet.sync(Mode::Barcode, Step::Detected, &mut events);
        assert!(sheet.is_scanned());

        sheet.sync(Mode::Barcode, Step::Scanning, &mut events);
        assert!(!sheet.is_scanned());
    }

    #[test]
    fn repeated_sync_emits_nothing() {
        let mut sheet = SheetState::new(&VersionProfile::version_a());
        let mut events = Vec::new();
        sheet.sync(Mode::Auto, Step::Scanning, &mut events);
        sheet.sync(Mode::Food, Step::Detected, &mut events);
        assert!(events.is_empty());
    }
}
