// SPDX-License-Identifier: MPL-2.0
//! One mounted prototype version: a mode switcher, a scan flow and a sheet
//! sharing a single logical event loop.

use super::event::ScanEvent;
use super::flow::{DrawerState, Phase, ScanFlowController};
use super::mode::{Mode, ResultKind, Step};
use super::mode_switcher::{ModeSwitcher, Request};
use super::profile::VersionProfile;
use super::progress::Progress;
use super::sheet::SheetState;
use std::time::Duration;

/// Upper bound on completions handled within one `advance` call, so a
/// misconfigured zero-length chain cannot spin forever.
const MAX_COMPLETIONS_PER_ADVANCE: usize = 1024;

#[derive(Debug, Clone)]
pub struct Session {
    profile: VersionProfile,
    switcher: ModeSwitcher,
    flow: ScanFlowController,
    sheet: SheetState,
    events: Vec<ScanEvent>,
}

impl Session {
    #[must_use]
    pub fn new(profile: VersionProfile) -> Self {
        let switcher = ModeSwitcher::new(&profile);
        let flow = ScanFlowController::new(profile.timing);
        let sheet = SheetState::new(&profile);
        Self {
            profile,
            switcher,
            flow,
            sheet,
            events: Vec::new(),
        }
    }

    /// Tap on a mode tab.
    ///
    /// An accepted request resets the scan flow immediately: pending flash,
    /// spinner, loading and drawer timers are cancelled without firing.
    pub fn request_mode_change(&mut self, mode: Mode) -> Request {
        let outcome = self.switcher.request_mode_change(mode, &mut self.events);
        if outcome.is_accepted() {
            let committed = self.switcher.committed_mode();
            self.flow.reset(committed, &mut self.events);
            self.sync_sheet();
        }
        outcome
    }

    /// Advances the scan flow by one step. Dropped during a mode switch.
    pub fn advance_scan(&mut self) -> bool {
        if self.switcher.is_busy() {
            return false;
        }
        let mode = self.switcher.committed_mode();
        let accepted = self.flow.advance(mode, &mut self.events);
        self.sync_sheet();
        accepted
    }

    /// Tap on the camera preview. Only advances in barcode mode.
    pub fn tap_camera(&mut self) -> bool {
        self.switcher.committed_mode().is_barcode() && self.advance_scan()
    }

    /// Tap on the shutter. Only advances outside barcode mode.
    pub fn tap_shutter(&mut self) -> bool {
        !self.switcher.committed_mode().is_barcode() && self.advance_scan()
    }

    /// Tap on the scanned item preview card in the sheet.
    pub fn tap_preview_card(&mut self) -> bool {
        if self.switcher.is_busy() {
            return false;
        }
        let mode = self.switcher.committed_mode();
        self.flow.open_preview(mode, &mut self.events)
    }

    /// Close control of a result screen.
    pub fn dismiss(&mut self) -> bool {
        self.flow.dismiss(&mut self.events)
    }

    /// Runs the event loop for `dt`.
    ///
    /// Time is consumed in slices that end exactly at the next completion,
    /// so callbacks fire in timestamp order whatever the caller's frame size.
    pub fn advance(&mut self, dt: Duration) {
        let mut budget = dt;
        let mut completions = 0;
        loop {
            let slice = match self.next_deadline() {
                Some(deadline) if deadline < budget => deadline,
                _ => budget,
            };
            let fired = self.step(slice);
            budget -= slice;
            completions += fired;
            if (budget.is_zero() && fired == 0) || completions >= MAX_COMPLETIONS_PER_ADVANCE {
                break;
            }
        }
    }

    /// Advances every clock by `slice`, then handles what completed.
    /// Returns the number of completions.
    fn step(&mut self, slice: Duration) -> usize {
        let blur = self.switcher.advance(slice);
        let flow = self.flow.advance_clocks(slice);
        self.sheet.advance(slice);

        let fired = flow.len() + usize::from(blur.is_some());

        for timer in flow {
            let mode = self.switcher.committed_mode();
            self.flow.complete(timer, mode, &mut self.events);
        }
        if let Some(phase) = blur {
            if let Some(mode) = self.switcher.complete(phase, &mut self.events) {
                self.flow.reset(mode, &mut self.events);
            }
        }
        self.sync_sheet();
        fired
    }

    fn sync_sheet(&mut self) {
        self.sheet.sync(
            self.switcher.committed_mode(),
            self.flow.step(),
            &mut self.events,
        );
    }

    /// Time until the next completion of any clock in the session.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        [self.switcher.next_deadline(), self.flow.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// True while any clock runs and frames should keep coming.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.switcher.is_animating() || self.flow.is_animating() || self.sheet.is_animating()
    }

    /// Takes the events published since the last call, in order.
    pub fn drain_events(&mut self) -> Vec<ScanEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn profile(&self) -> &VersionProfile {
        &self.profile
    }

    #[must_use]
    pub fn committed_mode(&self) -> Mode {
        self.switcher.committed_mode()
    }

    #[must_use]
    pub fn highlighted_mode(&self) -> Mode {
        self.switcher.highlighted_mode()
    }

    #[must_use]
    pub fn is_switching(&self) -> bool {
        self.switcher.is_busy()
    }

    #[must_use]
    pub fn step_value(&self) -> Step {
        self.flow.step()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.flow.phase()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.flow.is_loading()
    }

    #[must_use]
    pub fn drawer_state(&self) -> DrawerState {
        self.flow.drawer_state()
    }

    #[must_use]
    pub fn mounted_result(&self) -> Option<ResultKind> {
        self.flow.mounted_result()
    }

    #[must_use]
    pub fn is_full_result_open(&self) -> bool {
        self.flow.is_full_result_open()
    }

    #[must_use]
    pub fn is_sheet_visible(&self) -> bool {
        self.sheet.is_visible()
    }

    #[must_use]
    pub fn is_sheet_scanned(&self) -> bool {
        self.sheet.is_scanned()
    }

    #[must_use]
    pub fn is_spinner_running(&self) -> bool {
        self.flow.is_spinner_running()
    }

    #[must_use]
    pub fn blur_progress(&self) -> Progress {
        self.switcher.blur_progress()
    }

    #[must_use]
    pub fn layout_shift_progress(&self) -> Progress {
        self.switcher.layout_shift_progress()
    }

    #[must_use]
    pub fn flash_progress(&self) -> Progress {
        self.flow.flash_progress()
    }

    #[must_use]
    pub fn spinner_progress(&self) -> Progress {
        self.flow.spinner_progress()
    }

    #[must_use]
    pub fn drawer_progress(&self) -> Progress {
        self.flow.drawer_progress()
    }

    #[must_use]
    pub fn sheet_progress(&self) -> Progress {
        self.sheet.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ms;

    fn position(events: &[ScanEvent], wanted: ScanEvent) -> usize {
        events
            .iter()
            .position(|event| *event == wanted)
            .unwrap_or_else(|| panic!("missing {wanted:?} in {events:?}"))
    }

    #[test]
    fn auto_mode_scan_opens_drawer() {
        let mut session = Session::new(VersionProfile::version_a());

        assert!(session.tap_shutter());
        assert_eq!(session.step_value(), Step::Detected);
        assert!(!session.is_animating());

        assert!(session.tap_shutter());
        session.advance(ms(50));
        assert_eq!(session.step_value(), Step::Resulting);
        assert!(session.is_loading());
        assert!(session.is_spinner_running());

        session.advance(ms(1000));
        assert!(!session.is_loading());
        assert_eq!(session.drawer_state(), DrawerState::Opening);

        session.advance(ms(350));
        assert_eq!(session.drawer_state(), DrawerState::Open);
        assert_eq!(session.drawer_progress(), Progress::ONE);
        assert_eq!(session.mounted_result(), Some(ResultKind::Food));
    }

    #[test]
    fn flash_peak_precedes_fade_and_drawer() {
        let mut session = Session::new(VersionProfile::version_a());
        session.tap_shutter();
        session.tap_shutter();
        // One large frame must still produce callbacks in timestamp order.
        session.advance(ms(5000));
        let events = session.drain_events();

        let loading = position(&events, ScanEvent::LoadingStarted);
        let faded = position(&events, ScanEvent::FlashFaded);
        let mounted = position(
            &events,
            ScanEvent::DrawerMounted {
                kind: ResultKind::Food,
            },
        );
        assert!(position(&events, ScanEvent::FlashPeaked) < loading);
        assert!(loading < faded);
        assert!(faded < position(&events, ScanEvent::LoadingFinished));
        assert!(loading < mounted);
    }

    #[test]
    fn shutter_does_nothing_in_barcode_mode() {
        let mut session = Session::new(VersionProfile::version_a());
        session.request_mode_change(Mode::Barcode);
        session.advance(ms(700));

        assert!(!session.tap_shutter());
        assert!(session.tap_camera());
        assert_eq!(session.step_value(), Step::Detected);
        assert!(session.is_sheet_scanned());
    }

    #[test]
    fn camera_tap_does_nothing_outside_barcode() {
        let mut session = Session::new(VersionProfile::version_a());
        assert!(!session.tap_camera());
        assert_eq!(session.step_value(), Step::Scanning);
    }

    #[test]
    fn scan_taps_are_dropped_during_mode_switch() {
        let mut session = Session::new(VersionProfile::version_a());
        session.request_mode_change(Mode::Food);
        session.advance(ms(100));

        assert!(!session.tap_shutter());
        session.advance(ms(600));
        assert_eq!(session.step_value(), Step::Scanning);
        assert!(session.tap_shutter());
    }

    #[test]
    fn mode_change_while_resulting_resets_everything() {
        let mut session = Session::new(VersionProfile::version_a());
        session.tap_shutter();
        session.tap_shutter();
        session.advance(ms(1400));
        assert_eq!(session.drawer_state(), DrawerState::Open);

        assert!(session.request_mode_change(Mode::Recipe).is_accepted());
        assert_eq!(session.step_value(), Step::Scanning);
        assert!(!session.is_loading());
        assert_eq!(session.drawer_state(), DrawerState::Closed);
        assert_eq!(session.drawer_progress(), Progress::ZERO);
        assert_eq!(session.mounted_result(), None);

        session.drain_events();
        session.advance(ms(700));
        let events = session.drain_events();
        assert_eq!(
            events,
            vec![
                ScanEvent::ModeCommitted { mode: Mode::Recipe },
                ScanEvent::TransitionFinished { mode: Mode::Recipe },
            ]
        );
    }

    #[test]
    fn sheet_follows_committed_barcode_mode() {
        let mut session = Session::new(VersionProfile::version_b());
        session.request_mode_change(Mode::Barcode);
        session.advance(ms(349));
        assert!(!session.is_sheet_visible());

        session.advance(ms(1));
        assert!(session.is_sheet_visible());
        session.advance(ms(400));
        assert_eq!(session.sheet_progress(), Progress::ONE);
    }

    #[test]
    fn drained_events_are_not_repeated() {
        let mut session = Session::new(VersionProfile::version_a());
        session.tap_shutter();
        assert!(!session.drain_events().is_empty());
        assert!(session.drain_events().is_empty());
    }
}
