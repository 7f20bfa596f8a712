// SPDX-License-Identifier: MPL-2.0
//! Three-step scan flow: scanning, detected, resulting.
//!
//! The second `advance` starts the resulting sequence:
//!
//! ```text
//! flash 0→1 ──peak──▶ step 3, loading, spinner loop, flash 1→0
//!                    └─ loading delay ─▶ loading off, drawer 0→1 (non-barcode)
//! ```
//!
//! In barcode mode the drawer stays closed after loading; the preview card in
//! the sheet opens it instead. Closing the drawer ends the session and returns
//! to scanning.

use super::clock::{Delay, Target, TransitionClock};
use super::event::ScanEvent;
use super::mode::{Mode, ResultKind, Step};
use super::profile::Timing;
use super::progress::Progress;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Peak,
    Faded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerPhase {
    Opened,
    Closed,
}

/// Completion tokens of every clock owned by the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTimer {
    Flash(FlashPhase),
    LoadingElapsed,
    Drawer(DrawerPhase),
}

/// Sub-state of the resulting sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not in the resulting sequence.
    #[default]
    Idle,
    /// Flash ramping up, step still `Detected`.
    Flashing,
    /// Step `Resulting`, spinner running.
    Loading,
    /// Loading finished; the result is available.
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone)]
pub struct ScanFlowController {
    timing: Timing,
    step: Step,
    phase: Phase,
    loading: bool,
    drawer: DrawerState,
    mounted: Option<ResultKind>,
    full_result_open: bool,
    flash: TransitionClock<FlashPhase>,
    spinner: TransitionClock<()>,
    loading_timer: Delay<FlowTimer>,
    drawer_clock: TransitionClock<DrawerPhase>,
}

impl ScanFlowController {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            step: Step::Scanning,
            phase: Phase::Idle,
            loading: false,
            drawer: DrawerState::Closed,
            mounted: None,
            full_result_open: false,
            flash: TransitionClock::new(),
            spinner: TransitionClock::new(),
            loading_timer: Delay::new(),
            drawer_clock: TransitionClock::new(),
        }
    }

    /// Moves the flow forward by one tap. Returns false when ignored.
    pub fn advance(&mut self, mode: Mode, events: &mut Vec<ScanEvent>) -> bool {
        match (self.step, self.phase) {
            (Step::Scanning, _) => {
                self.step = Step::Detected;
                events.push(ScanEvent::StepChanged {
                    mode,
                    step: self.step,
                });
                true
            }
            (Step::Detected, Phase::Idle) => {
                self.phase = Phase::Flashing;
                self.flash.run(
                    Target::One,
                    self.timing.flash_in,
                    Some(FlashPhase::Peak),
                );
                events.push(ScanEvent::FlashStarted);
                true
            }
            // Flash already on its way, or step 3.
            _ => false,
        }
    }

    /// Mounts `kind` and slides the drawer in. Ignored while already open
    /// or opening.
    pub fn open_drawer(&mut self, kind: ResultKind, events: &mut Vec<ScanEvent>) -> bool {
        if matches!(self.drawer, DrawerState::Open | DrawerState::Opening) {
            return false;
        }
        if self.mounted != Some(kind) {
            self.mounted = Some(kind);
            events.push(ScanEvent::DrawerMounted { kind });
        }
        self.drawer = DrawerState::Opening;
        self.drawer_clock.run(
            Target::One,
            self.timing.drawer_open,
            Some(DrawerPhase::Opened),
        );
        true
    }

    /// Slides the drawer out. Idempotent when nothing is open.
    pub fn close_drawer(&mut self, events: &mut Vec<ScanEvent>) -> bool {
        if matches!(self.drawer, DrawerState::Closed | DrawerState::Closing) {
            return false;
        }
        self.drawer = DrawerState::Closing;
        self.drawer_clock.run(
            Target::Zero,
            self.timing.drawer_close,
            Some(DrawerPhase::Closed),
        );
        events.push(ScanEvent::DrawerClosing);
        true
    }

    /// The only external way to leave `Resulting`.
    pub fn dismiss(&mut self, events: &mut Vec<ScanEvent>) -> bool {
        self.close_drawer(events)
    }

    /// Second stage of the barcode reveal: the preview card tap opens the
    /// barcode result once loading has finished.
    pub fn open_preview(&mut self, mode: Mode, events: &mut Vec<ScanEvent>) -> bool {
        if !mode.is_barcode() || self.step != Step::Resulting || self.phase != Phase::Ready {
            return false;
        }
        if !self.open_drawer(ResultKind::Barcode, events) {
            return false;
        }
        self.full_result_open = true;
        true
    }

    /// Forces the flow back to scanning, cancelling every timer silently.
    pub fn reset(&mut self, mode: Mode, events: &mut Vec<ScanEvent>) {
        let dirty = self.step != Step::Scanning
            || self.phase != Phase::Idle
            || self.drawer != DrawerState::Closed
            || self.mounted.is_some()
            || self.loading;

        self.flash.reset();
        self.spinner.reset();
        self.loading_timer.cancel();
        self.drawer_clock.reset();

        if !dirty {
            return;
        }
        let unmounted = self.mounted.take();
        self.step = Step::Scanning;
        self.phase = Phase::Idle;
        self.loading = false;
        self.drawer = DrawerState::Closed;
        self.full_result_open = false;
        events.push(ScanEvent::FlowReset { unmounted });
        events.push(ScanEvent::StepChanged {
            mode,
            step: Step::Scanning,
        });
    }

    /// Advances every clock, returning the completions of this step in a
    /// fixed order: flash, loading, drawer.
    pub fn advance_clocks(&mut self, dt: Duration) -> Vec<FlowTimer> {
        let mut fired = Vec::new();
        if let Some(phase) = self.flash.advance(dt) {
            fired.push(FlowTimer::Flash(phase));
        }
        self.spinner.advance(dt);
        if let Some(timer) = self.loading_timer.advance(dt) {
            fired.push(timer);
        }
        if let Some(phase) = self.drawer_clock.advance(dt) {
            fired.push(FlowTimer::Drawer(phase));
        }
        fired
    }

    /// Handles one completion. `mode` is the committed mode.
    pub fn complete(&mut self, timer: FlowTimer, mode: Mode, events: &mut Vec<ScanEvent>) {
        match timer {
            FlowTimer::Flash(FlashPhase::Peak) => {
                events.push(ScanEvent::FlashPeaked);
                self.step = Step::Resulting;
                self.phase = Phase::Loading;
                self.loading = true;
                events.push(ScanEvent::StepChanged {
                    mode,
                    step: self.step,
                });
                events.push(ScanEvent::LoadingStarted);
                self.spinner.start_loop(self.timing.spinner_period);
                self.loading_timer
                    .start(self.timing.loading_delay(mode), FlowTimer::LoadingElapsed);
                self.flash.run(
                    Target::Zero,
                    self.timing.flash_out,
                    Some(FlashPhase::Faded),
                );
            }
            FlowTimer::Flash(FlashPhase::Faded) => {
                events.push(ScanEvent::FlashFaded);
            }
            FlowTimer::LoadingElapsed => {
                self.loading = false;
                self.phase = Phase::Ready;
                self.spinner.reset();
                events.push(ScanEvent::LoadingFinished);
                if !mode.is_barcode() {
                    self.open_drawer(mode.result_kind(), events);
                }
            }
            FlowTimer::Drawer(DrawerPhase::Opened) => {
                self.drawer = DrawerState::Open;
                events.push(ScanEvent::DrawerOpened);
            }
            FlowTimer::Drawer(DrawerPhase::Closed) => {
                self.drawer = DrawerState::Closed;
                self.mounted = None;
                self.step = Step::Scanning;
                self.phase = Phase::Idle;
                self.loading = false;
                self.full_result_open = false;
                events.push(ScanEvent::DrawerClosed);
                events.push(ScanEvent::StepChanged {
                    mode,
                    step: self.step,
                });
            }
        }
    }

    /// Time until the next completion of any owned clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.flash.remaining(),
            self.loading_timer.remaining(),
            self.drawer_clock.remaining(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flash.is_running()
            || self.spinner.is_running()
            || self.loading_timer.is_pending()
            || self.drawer_clock.is_running()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn drawer_state(&self) -> DrawerState {
        self.drawer
    }

    #[must_use]
    pub fn drawer_progress(&self) -> Progress {
        self.drawer_clock.progress()
    }

    #[must_use]
    pub fn flash_progress(&self) -> Progress {
        self.flash.progress()
    }

    #[must_use]
    pub fn spinner_progress(&self) -> Progress {
        self.spinner.progress()
    }

    #[must_use]
    pub fn is_spinner_running(&self) -> bool {
        self.spinner.is_looping()
    }

    /// Result screen currently mounted in the drawer.
    #[must_use]
    pub fn mounted_result(&self) -> Option<ResultKind> {
        self.mounted
    }

    /// True while the barcode result was opened from the preview card.
    #[must_use]
    pub fn is_full_result_open(&self) -> bool {
        self.full_result_open
    }
}
