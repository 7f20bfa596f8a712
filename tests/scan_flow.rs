// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the scan core, driven through explicit time deltas.

use approx::assert_abs_diff_eq;
use smart_scan::application::port::ScreenHost;
use smart_scan::application::shell::{AppShell, Tap};
use smart_scan::domain::scan::{
    DrawerState, Mode, Request, ResultKind, ScanEvent, Session, Step, Version, VersionProfile,
};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn position(events: &[ScanEvent], wanted: &ScanEvent) -> usize {
    events
        .iter()
        .position(|event| event == wanted)
        .unwrap_or_else(|| panic!("{wanted:?} not published in {events:?}"))
}

/// Advances in small frames, collecting every published event.
fn run_frames(session: &mut Session, total: Duration, frame: Duration) -> Vec<ScanEvent> {
    let mut events = session.drain_events();
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        session.advance(frame);
        events.extend(session.drain_events());
        elapsed += frame;
    }
    events
}

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    Render(Mode, Step),
    Result(ResultKind),
    Unmount,
    Tabs(Mode),
    Sheet(bool, bool),
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<HostCall>,
}

impl ScreenHost for RecordingHost {
    fn render(&mut self, mode: Mode, step: Step) {
        self.calls.push(HostCall::Render(mode, step));
    }

    fn render_result(&mut self, kind: ResultKind) {
        self.calls.push(HostCall::Result(kind));
    }

    fn unmount_result(&mut self) {
        self.calls.push(HostCall::Unmount);
    }

    fn render_tabs(&mut self, _modes: &[Mode], highlighted: Mode) {
        self.calls.push(HostCall::Tabs(highlighted));
    }

    fn render_sheet(&mut self, visible: bool, scanned: bool) {
        self.calls.push(HostCall::Sheet(visible, scanned));
    }
}

#[test]
fn redundant_requests_never_change_state() {
    for profile in [VersionProfile::version_a(), VersionProfile::version_b()] {
        let mut session = Session::new(profile);
        session.tap_shutter();
        for _ in 0..5 {
            assert_eq!(session.request_mode_change(Mode::Auto), Request::Redundant);
        }
        assert!(!session.is_switching());
        assert_eq!(session.step_value(), Step::Detected);
        assert_eq!(session.committed_mode(), Mode::Auto);
        assert!(!session.is_animating());
    }
}

#[test]
fn back_to_back_requests_commit_exactly_once() {
    let mut session = Session::new(VersionProfile::version_a());
    assert!(session.request_mode_change(Mode::Recipe).is_accepted());
    assert_eq!(session.request_mode_change(Mode::Menu), Request::Busy);

    let events = run_frames(&mut session, ms(1000), ms(16));
    let commits: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, ScanEvent::ModeCommitted { .. }))
        .collect();
    assert_eq!(commits, vec![&ScanEvent::ModeCommitted { mode: Mode::Recipe }]);
    assert_eq!(session.committed_mode(), Mode::Recipe);
    assert!(!session.is_switching());
}

#[test]
fn busy_clears_after_one_full_blur_cycle() {
    let mut session = Session::new(VersionProfile::version_a());
    session.request_mode_change(Mode::Menu);

    session.advance(ms(349));
    assert!(session.is_switching());
    assert_eq!(session.committed_mode(), Mode::Auto);

    session.advance(ms(1));
    assert_eq!(session.committed_mode(), Mode::Menu);
    assert!(session.is_switching());
    assert_abs_diff_eq!(session.blur_progress().value(), 1.0);

    session.advance(ms(349));
    assert!(session.is_switching());
    session.advance(ms(1));
    assert!(!session.is_switching());
    assert_abs_diff_eq!(session.blur_progress().value(), 0.0);
}

#[test]
fn loading_starts_before_flash_fades_and_drawer_opens() {
    for mode in [Mode::Auto, Mode::Food, Mode::Recipe, Mode::Menu] {
        let mut session = Session::new(VersionProfile::version_a());
        if mode != Mode::Auto {
            session.request_mode_change(mode);
            session.advance(ms(700));
        }
        session.tap_shutter();
        session.tap_shutter();

        // One huge frame: ordering must not depend on frame size.
        session.advance(ms(5000));
        let events = session.drain_events();

        let loading = position(&events, &ScanEvent::LoadingStarted);
        let faded = position(&events, &ScanEvent::FlashFaded);
        let mounted = position(
            &events,
            &ScanEvent::DrawerMounted {
                kind: mode.result_kind(),
            },
        );
        assert!(position(&events, &ScanEvent::FlashPeaked) < loading);
        assert!(loading < faded, "{mode:?}");
        assert!(loading < mounted, "{mode:?}");
        assert!(faded < mounted, "{mode:?}");
        assert_eq!(session.drawer_state(), DrawerState::Open);
    }
}

#[test]
fn step_never_skips_detected() {
    let mut session = Session::new(VersionProfile::version_b());
    let mut last = session.step_value();
    let taps = [Tap::Shutter, Tap::Camera, Tap::Shutter, Tap::Shutter, Tap::PreviewCard];

    for (index, tap) in taps.iter().cycle().take(40).enumerate() {
        match tap {
            Tap::Shutter => {
                session.tap_shutter();
            }
            Tap::Camera => {
                session.tap_camera();
            }
            Tap::PreviewCard => {
                session.tap_preview_card();
            }
            Tap::CloseResult | Tap::Mode(_) => {}
        }
        if index % 7 == 6 {
            session.dismiss();
        }
        session.advance(ms(120));

        let step = session.step_value();
        assert!((1..=3).contains(&step.number()));
        assert!(
            !(last == Step::Scanning && step == Step::Resulting),
            "jumped from 1 to 3"
        );
        last = step;
    }
}

#[test]
fn mode_change_with_open_drawer_resets_without_stray_callbacks() {
    let mut session = Session::new(VersionProfile::version_a());
    session.tap_shutter();
    session.tap_shutter();
    session.advance(ms(1500));
    assert_eq!(session.drawer_state(), DrawerState::Open);
    assert_eq!(session.step_value(), Step::Resulting);
    session.drain_events();

    assert!(session.request_mode_change(Mode::Recipe).is_accepted());
    assert_eq!(session.step_value(), Step::Scanning);
    assert!(!session.is_loading());
    assert_eq!(session.drawer_state(), DrawerState::Closed);
    assert_abs_diff_eq!(session.drawer_progress().value(), 0.0);
    assert_eq!(session.mounted_result(), None);

    session.advance(ms(5000));
    let events = session.drain_events();
    assert!(events.iter().all(|event| matches!(
        event,
        ScanEvent::ModeRequested { .. }
            | ScanEvent::FlowReset { .. }
            | ScanEvent::StepChanged {
                step: Step::Scanning,
                ..
            }
            | ScanEvent::ModeCommitted { .. }
            | ScanEvent::TransitionFinished { .. }
    )));
    assert!(!events.iter().any(|event| matches!(
        event,
        ScanEvent::DrawerOpened | ScanEvent::DrawerClosed | ScanEvent::LoadingFinished
    )));
}

#[test]
fn barcode_needs_preview_tap_for_full_result() {
    let mut session = Session::new(VersionProfile::version_b());
    session.request_mode_change(Mode::Barcode);
    session.advance(ms(700));

    session.tap_camera();
    session.tap_camera();
    session.advance(ms(3000));
    assert_eq!(session.step_value(), Step::Resulting);
    assert_eq!(session.drawer_state(), DrawerState::Closed);
    assert!(!session.is_full_result_open());

    assert!(session.tap_preview_card());
    session.advance(ms(350));
    assert_eq!(session.drawer_state(), DrawerState::Open);
    assert_eq!(session.mounted_result(), Some(ResultKind::Barcode));
    assert!(session.is_full_result_open());
}

#[test]
fn auto_scenario_follows_reference_timeline() {
    let mut session = Session::new(VersionProfile::version_a());

    assert!(session.tap_shutter());
    assert_eq!(session.step_value(), Step::Detected);
    assert!(!session.is_animating());

    assert!(session.tap_shutter());
    session.advance(ms(49));
    assert_eq!(session.step_value(), Step::Detected);
    session.advance(ms(1));
    assert_eq!(session.step_value(), Step::Resulting);
    assert!(session.is_loading());
    assert!(session.is_spinner_running());

    session.advance(ms(999));
    assert!(session.is_loading());
    session.advance(ms(1));
    assert!(!session.is_loading());
    assert_eq!(session.drawer_state(), DrawerState::Opening);

    session.advance(ms(175));
    assert_abs_diff_eq!(session.drawer_progress().value(), 0.5, epsilon = 1e-4);
    session.advance(ms(175));
    assert_eq!(session.step_value(), Step::Resulting);
    assert_eq!(session.drawer_state(), DrawerState::Open);
    assert!(!session.is_animating());
}

#[test]
fn barcode_scenario_uses_short_delay_and_marks_sheet() {
    let mut session = Session::new(VersionProfile::version_a());
    session.request_mode_change(Mode::Barcode);
    session.advance(ms(700));
    assert!(session.is_sheet_visible());
    assert!(!session.is_sheet_scanned());

    assert!(session.tap_camera());
    assert!(session.is_sheet_scanned());
    assert!(!session.tap_shutter());

    session.tap_camera();
    session.advance(ms(50));
    assert!(session.is_loading());
    session.advance(ms(499));
    assert!(session.is_loading());
    session.advance(ms(1));
    assert!(!session.is_loading());

    session.advance(ms(2000));
    assert_eq!(session.step_value(), Step::Resulting);
    assert_eq!(session.drawer_state(), DrawerState::Closed);
}

#[test]
fn request_mid_blur_is_ignored() {
    let mut session = Session::new(VersionProfile::version_a());
    session.request_mode_change(Mode::Recipe);
    session.advance(ms(200));
    assert_eq!(session.request_mode_change(Mode::Menu), Request::Busy);

    session.advance(ms(1000));
    assert_eq!(session.committed_mode(), Mode::Recipe);
    assert_eq!(session.highlighted_mode(), Mode::Recipe);
}

#[test]
fn shell_drives_host_through_full_scan() {
    let mut shell = AppShell::new(RecordingHost::default(), Version::A);
    assert_eq!(
        shell.host().calls,
        vec![
            HostCall::Tabs(Mode::Auto),
            HostCall::Render(Mode::Auto, Step::Scanning),
            HostCall::Sheet(false, false),
        ]
    );
    shell.host_mut().calls.clear();

    shell.tap(Tap::Shutter);
    shell.tap(Tap::Shutter);
    for _ in 0..100 {
        shell.advance(ms(16));
    }
    assert_eq!(
        shell.host().calls,
        vec![
            HostCall::Render(Mode::Auto, Step::Detected),
            HostCall::Render(Mode::Auto, Step::Resulting),
            HostCall::Result(ResultKind::Food),
        ]
    );

    shell.host_mut().calls.clear();
    shell.tap(Tap::CloseResult);
    shell.advance(ms(300));
    assert_eq!(
        shell.host().calls,
        vec![HostCall::Unmount, HostCall::Render(Mode::Auto, Step::Scanning)]
    );
}

#[test]
fn version_b_tabs_move_at_request_and_content_at_commit() {
    let mut shell = AppShell::new(RecordingHost::default(), Version::B);
    shell.host_mut().calls.clear();

    assert!(shell.tap(Tap::Mode(Mode::Barcode)));
    assert_eq!(shell.host().calls, vec![HostCall::Tabs(Mode::Barcode)]);

    shell.advance(ms(350));
    assert_eq!(
        &shell.host().calls[1..],
        &[
            HostCall::Tabs(Mode::Barcode),
            HostCall::Render(Mode::Barcode, Step::Scanning),
            HostCall::Sheet(true, false),
        ]
    );
    assert_abs_diff_eq!(shell.session().layout_shift_progress().value(), 1.0);
}

#[test]
fn menu_mode_exists_only_in_version_a() {
    let mut shell = AppShell::new(RecordingHost::default(), Version::B);
    assert!(!shell.tap(Tap::Mode(Mode::Menu)));
    assert!(shell.select_version(Version::A));
    assert!(shell.tap(Tap::Mode(Mode::Menu)));
}

#[test]
fn switching_versions_discards_running_scan() {
    let mut shell = AppShell::new(RecordingHost::default(), Version::A);
    shell.tap(Tap::Shutter);
    shell.tap(Tap::Shutter);
    shell.advance(ms(1200));
    assert_eq!(shell.session().mounted_result(), Some(ResultKind::Food));

    shell.host_mut().calls.clear();
    assert!(shell.select_version(Version::B));
    assert_eq!(shell.host().calls[0], HostCall::Unmount);
    assert_eq!(shell.session().step_value(), Step::Scanning);
    assert!(!shell.is_animating());

    shell.advance(ms(5000));
    assert!(!shell.host().calls.contains(&HostCall::Result(ResultKind::Food)));
}
