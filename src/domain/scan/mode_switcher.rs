// SPDX-License-Identifier: MPL-2.0
//! Active mode ownership and the blur-out / swap / blur-in sequence.
//!
//! A switch runs in two halves of equal length. The blur ramps 0→1, the mode
//! is committed at the peak (the only instant the rendered content changes),
//! then the blur ramps back 1→0. Requests arriving while a switch is in
//! flight are dropped, never queued.

use super::clock::{Target, TransitionClock};
use super::event::ScanEvent;
use super::mode::Mode;
use super::profile::VersionProfile;
use super::progress::Progress;
use std::time::Duration;

/// Completion tokens of the blur clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurPhase {
    Peak,
    Cleared,
}

/// Outcome of a mode change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Accepted,
    /// Target equals the committed mode.
    Redundant,
    /// Another switch is in flight.
    Busy,
    /// Target is not part of this version's mode set.
    Unsupported,
}

impl Request {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Request::Accepted)
    }
}

#[derive(Debug, Clone)]
pub struct ModeSwitcher {
    modes: &'static [Mode],
    committed: Mode,
    highlighted: Mode,
    pending: Option<Mode>,
    busy: bool,
    decoupled_highlight: bool,
    shift_enabled: bool,
    blur_duration: Duration,
    blur: TransitionClock<BlurPhase>,
    layout_shift: TransitionClock<()>,
}

impl ModeSwitcher {
    #[must_use]
    pub fn new(profile: &VersionProfile) -> Self {
        let initial = profile.initial_mode;
        let shift_rest = if initial.is_barcode() {
            Target::One
        } else {
            Target::Zero
        };
        Self {
            modes: profile.modes,
            committed: initial,
            highlighted: initial,
            pending: None,
            busy: false,
            decoupled_highlight: profile.decoupled_highlight,
            shift_enabled: profile.layout_shift.is_some(),
            blur_duration: profile.timing.blur,
            blur: TransitionClock::new(),
            layout_shift: TransitionClock::settled(shift_rest),
        }
    }

    /// Starts a switch to `new_mode` unless it is redundant, unsupported or
    /// another switch is already running.
    pub fn request_mode_change(&mut self, new_mode: Mode, events: &mut Vec<ScanEvent>) -> Request {
        if !self.modes.contains(&new_mode) {
            return Request::Unsupported;
        }
        if new_mode == self.committed {
            return Request::Redundant;
        }
        if self.busy {
            return Request::Busy;
        }

        self.busy = true;
        self.pending = Some(new_mode);
        events.push(ScanEvent::ModeRequested {
            from: self.committed,
            to: new_mode,
        });

        self.blur
            .run(Target::One, self.blur_duration, Some(BlurPhase::Peak));
        if self.shift_enabled && (new_mode.is_barcode() || self.committed.is_barcode()) {
            let target = if new_mode.is_barcode() {
                Target::One
            } else {
                Target::Zero
            };
            self.layout_shift.run(target, self.blur_duration, None);
        }

        if self.decoupled_highlight {
            self.highlighted = new_mode;
            events.push(ScanEvent::HighlightChanged { mode: new_mode });
        }

        Request::Accepted
    }

    /// Advances the blur and layout shift clocks, returning a blur phase that
    /// completed during this step.
    pub fn advance(&mut self, dt: Duration) -> Option<BlurPhase> {
        self.layout_shift.advance(dt);
        self.blur.advance(dt)
    }

    /// Handles a completed blur phase. Returns the newly committed mode at
    /// the peak.
    pub fn complete(&mut self, phase: BlurPhase, events: &mut Vec<ScanEvent>) -> Option<Mode> {
        match phase {
            BlurPhase::Peak => {
                let mode = self.pending.take()?;
                self.committed = mode;
                self.highlighted = mode;
                events.push(ScanEvent::ModeCommitted { mode });
                self.blur
                    .run(Target::Zero, self.blur_duration, Some(BlurPhase::Cleared));
                Some(mode)
            }
            BlurPhase::Cleared => {
                self.busy = false;
                events.push(ScanEvent::TransitionFinished {
                    mode: self.committed,
                });
                None
            }
        }
    }

    /// Time until the next blur completion.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.blur.remaining()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.blur.is_running() || self.layout_shift.is_running()
    }

    /// Mode whose content is rendered.
    #[must_use]
    pub fn committed_mode(&self) -> Mode {
        self.committed
    }

    /// Mode shown as selected in the tabs. Equals the committed mode unless
    /// highlight decoupling is enabled and a switch is in flight.
    #[must_use]
    pub fn highlighted_mode(&self) -> Mode {
        self.highlighted
    }

    #[must_use]
    pub fn modes(&self) -> &'static [Mode] {
        self.modes
    }

    #[must_use]
    pub fn blur_progress(&self) -> Progress {
        self.blur.progress()
    }

    #[must_use]
    pub fn layout_shift_progress(&self) -> Progress {
        self.layout_shift.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, ms};

    /// Drives the switcher alone, handling completions as they fire.
    fn run_for(switcher: &mut ModeSwitcher, total: Duration, events: &mut Vec<ScanEvent>) {
        let mut left = total;
        while !left.is_zero() {
            let step = switcher.next_deadline().map_or(left, |d| d.min(left));
            if let Some(phase) = switcher.advance(step) {
                switcher.complete(phase, events);
            }
            left -= step;
        }
    }

    #[test]
    fn redundant_request_is_ignored() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_a());
        let mut events = Vec::new();

        for _ in 0..3 {
            assert_eq!(
                switcher.request_mode_change(Mode::Auto, &mut events),
                Request::Redundant
            );
        }
        assert!(!switcher.is_busy());
        assert!(events.is_empty());
    }

    #[test]
    fn commit_happens_at_blur_peak() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_a());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Recipe, &mut events);

        run_for(&mut switcher, ms(349), &mut events);
        assert_eq!(switcher.committed_mode(), Mode::Auto);

        run_for(&mut switcher, ms(1), &mut events);
        assert_eq!(switcher.committed_mode(), Mode::Recipe);
        assert!(switcher.is_busy());
        assert_eq!(switcher.blur_progress(), Progress::ONE);

        run_for(&mut switcher, ms(350), &mut events);
        assert!(!switcher.is_busy());
        assert_eq!(switcher.blur_progress(), Progress::ZERO);
        assert_eq!(
            events,
            vec![
                ScanEvent::ModeRequested {
                    from: Mode::Auto,
                    to: Mode::Recipe
                },
                ScanEvent::ModeCommitted { mode: Mode::Recipe },
                ScanEvent::TransitionFinished { mode: Mode::Recipe },
            ]
        );
    }

    #[test]
    fn request_during_switch_is_dropped() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_a());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Food, &mut events);
        run_for(&mut switcher, ms(100), &mut events);

        assert_eq!(
            switcher.request_mode_change(Mode::Menu, &mut events),
            Request::Busy
        );
        run_for(&mut switcher, ms(2000), &mut events);
        assert_eq!(switcher.committed_mode(), Mode::Food);

        // The next request after busy clears wins.
        assert!(switcher
            .request_mode_change(Mode::Menu, &mut events)
            .is_accepted());
    }

    #[test]
    fn unsupported_mode_is_rejected() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_b());
        let mut events = Vec::new();
        assert_eq!(
            switcher.request_mode_change(Mode::Menu, &mut events),
            Request::Unsupported
        );
        assert!(!switcher.is_busy());
    }

    #[test]
    fn layout_shift_tracks_blur_in_when_entering_barcode() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_b());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Barcode, &mut events);

        run_for(&mut switcher, ms(175), &mut events);
        assert_abs_diff_eq!(
            switcher.layout_shift_progress().value(),
            switcher.blur_progress().value(),
            epsilon = 1e-4
        );

        run_for(&mut switcher, ms(175), &mut events);
        assert_eq!(switcher.layout_shift_progress(), Progress::ONE);

        // The shift does not run with the blur-out.
        run_for(&mut switcher, ms(175), &mut events);
        assert_eq!(switcher.layout_shift_progress(), Progress::ONE);
    }

    #[test]
    fn layout_shift_reverses_when_leaving_barcode() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_b());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Barcode, &mut events);
        run_for(&mut switcher, ms(700), &mut events);

        switcher.request_mode_change(Mode::Food, &mut events);
        run_for(&mut switcher, ms(350), &mut events);
        assert_eq!(switcher.layout_shift_progress(), Progress::ZERO);
    }

    #[test]
    fn version_a_has_no_layout_shift() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_a());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Barcode, &mut events);
        run_for(&mut switcher, ms(200), &mut events);
        assert_eq!(switcher.layout_shift_progress(), Progress::ZERO);
    }

    #[test]
    fn decoupled_highlight_moves_at_request_time() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_b());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Recipe, &mut events);

        assert_eq!(switcher.highlighted_mode(), Mode::Recipe);
        assert_eq!(switcher.committed_mode(), Mode::Auto);
        assert!(events.contains(&ScanEvent::HighlightChanged { mode: Mode::Recipe }));
    }

    #[test]
    fn coupled_highlight_waits_for_commit() {
        let mut switcher = ModeSwitcher::new(&VersionProfile::version_a());
        let mut events = Vec::new();
        switcher.request_mode_change(Mode::Recipe, &mut events);

        assert_eq!(switcher.highlighted_mode(), Mode::Auto);
        run_for(&mut switcher, ms(350), &mut events);
        assert_eq!(switcher.highlighted_mode(), Mode::Recipe);
    }
}
