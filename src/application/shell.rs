// SPDX-License-Identifier: MPL-2.0
//! Top-level composition: one mounted [`Session`] per selected version.
//!
//! The shell turns user taps into session calls, runs the session's event
//! loop and forwards every published [`ScanEvent`] to the [`ScreenHost`].
//! Switching versions drops the old session entirely.

use crate::application::port::ScreenHost;
use crate::domain::scan::{Mode, ScanEvent, Session, Step, Version, VersionProfile};
use std::time::Duration;

/// User inputs understood by the prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// A mode tab.
    Mode(Mode),
    /// The camera preview (barcode mode scans this way).
    Camera,
    /// The shutter control (every other mode).
    Shutter,
    /// The scanned item card in the search sheet.
    PreviewCard,
    /// The close control of a result screen.
    CloseResult,
}

pub struct AppShell<H: ScreenHost> {
    host: H,
    version: Version,
    session: Session,
}

impl<H: ScreenHost> AppShell<H> {
    /// Mounts `version` and renders its initial screen.
    pub fn new(host: H, version: Version) -> Self {
        let mut shell = Self {
            host,
            version,
            session: Session::new(VersionProfile::for_version(version)),
        };
        shell.mount();
        shell
    }

    /// Swaps in a fresh session for `version`. Returns false when it is
    /// already mounted.
    pub fn select_version(&mut self, version: Version) -> bool {
        if version == self.version {
            return false;
        }
        tracing::info!(from = %self.version, to = %version, "switching prototype version");
        self.host.unmount_result();
        self.version = version;
        self.session = Session::new(VersionProfile::for_version(version));
        self.mount();
        true
    }

    /// Routes a tap to the session. Returns false when the tap was ignored.
    pub fn tap(&mut self, tap: Tap) -> bool {
        let handled = match tap {
            Tap::Mode(mode) => self.session.request_mode_change(mode).is_accepted(),
            Tap::Camera => self.session.tap_camera(),
            Tap::Shutter => self.session.tap_shutter(),
            Tap::PreviewCard => self.session.tap_preview_card(),
            Tap::CloseResult => self.session.dismiss(),
        };
        if !handled {
            tracing::trace!(?tap, version = %self.version, "tap ignored");
        }
        self.flush();
        handled
    }

    /// Advances the mounted session by `dt` of animation time.
    pub fn advance(&mut self, dt: Duration) {
        self.session.advance(dt);
        self.flush();
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session.is_animating()
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn mount(&mut self) {
        self.dispatch(ScanEvent::VersionSelected {
            version: self.version,
        });
        self.flush();
    }

    fn flush(&mut self) {
        for event in self.session.drain_events() {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ScanEvent) {
        tracing::debug!(?event, version = %self.version, "scan event");
        let session = &self.session;
        match event {
            ScanEvent::VersionSelected { .. } => {
                self.host
                    .render_tabs(session.profile().modes, session.highlighted_mode());
                self.host
                    .render(session.committed_mode(), session.step_value());
                self.host
                    .render_sheet(session.is_sheet_visible(), session.is_sheet_scanned());
            }
            ScanEvent::HighlightChanged { mode } => {
                self.host.render_tabs(session.profile().modes, mode);
            }
            ScanEvent::ModeCommitted { mode } => {
                self.host.render_tabs(session.profile().modes, mode);
                self.host.render(mode, Step::Scanning);
            }
            ScanEvent::StepChanged { mode, step } => self.host.render(mode, step),
            ScanEvent::DrawerMounted { kind } => self.host.render_result(kind),
            ScanEvent::DrawerClosed | ScanEvent::FlowReset { unmounted: Some(_) } => {
                self.host.unmount_result();
            }
            ScanEvent::SheetVisibility { .. } | ScanEvent::SheetScanned { .. } => {
                self.host
                    .render_sheet(session.is_sheet_visible(), session.is_sheet_scanned());
            }
            ScanEvent::ModeRequested { .. }
            | ScanEvent::TransitionFinished { .. }
            | ScanEvent::FlashStarted
            | ScanEvent::FlashPeaked
            | ScanEvent::LoadingStarted
            | ScanEvent::FlashFaded
            | ScanEvent::LoadingFinished
            | ScanEvent::DrawerOpened
            | ScanEvent::DrawerClosing
            | ScanEvent::FlowReset { unmounted: None } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::ResultKind;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Render(Mode, Step),
        Result(ResultKind),
        Unmount,
        Tabs(usize, Mode),
        Sheet(bool, bool),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl ScreenHost for Recorder {
        fn render(&mut self, mode: Mode, step: Step) {
            self.calls.push(Call::Render(mode, step));
        }

        fn render_result(&mut self, kind: ResultKind) {
            self.calls.push(Call::Result(kind));
        }

        fn unmount_result(&mut self) {
            self.calls.push(Call::Unmount);
        }

        fn render_tabs(&mut self, modes: &[Mode], highlighted: Mode) {
            self.calls.push(Call::Tabs(modes.len(), highlighted));
        }

        fn render_sheet(&mut self, visible: bool, scanned: bool) {
            self.calls.push(Call::Sheet(visible, scanned));
        }
    }

    fn shell(version: Version) -> AppShell<Recorder> {
        let mut shell = AppShell::new(Recorder::default(), version);
        shell.host_mut().calls.clear();
        shell
    }

    #[test]
    fn mount_renders_initial_screen() {
        let shell = AppShell::new(Recorder::default(), Version::B);
        assert_eq!(
            shell.host().calls,
            vec![
                Call::Tabs(4, Mode::Auto),
                Call::Render(Mode::Auto, Step::Scanning),
                Call::Sheet(false, false),
            ]
        );
    }

    #[test]
    fn content_swaps_only_at_commit() {
        let mut shell = shell(Version::A);
        assert!(shell.tap(Tap::Mode(Mode::Menu)));
        assert!(shell.host().calls.is_empty());

        shell.advance(Duration::from_millis(350));
        assert_eq!(
            shell.host().calls,
            vec![
                Call::Tabs(5, Mode::Menu),
                Call::Render(Mode::Menu, Step::Scanning),
            ]
        );
    }

    #[test]
    fn decoupled_highlight_renders_tabs_at_request() {
        let mut shell = shell(Version::B);
        shell.tap(Tap::Mode(Mode::Food));
        assert_eq!(shell.host().calls, vec![Call::Tabs(4, Mode::Food)]);
    }

    #[test]
    fn food_scan_mounts_and_dismiss_unmounts() {
        let mut shell = shell(Version::A);
        shell.tap(Tap::Shutter);
        shell.tap(Tap::Shutter);
        shell.advance(Duration::from_millis(1400));
        assert!(shell.host().calls.contains(&Call::Result(ResultKind::Food)));

        shell.host_mut().calls.clear();
        assert!(shell.tap(Tap::CloseResult));
        shell.advance(Duration::from_millis(300));
        assert_eq!(
            shell.host().calls,
            vec![Call::Unmount, Call::Render(Mode::Auto, Step::Scanning)]
        );
    }

    #[test]
    fn same_version_is_a_no_op() {
        let mut shell = shell(Version::A);
        shell.tap(Tap::Shutter);
        assert!(!shell.select_version(Version::A));
        assert_eq!(shell.session().step_value(), Step::Detected);
    }

    #[test]
    fn other_version_starts_fresh() {
        let mut shell = shell(Version::A);
        shell.tap(Tap::Shutter);
        assert!(shell.select_version(Version::B));
        assert_eq!(shell.version(), Version::B);
        assert_eq!(shell.session().step_value(), Step::Scanning);
        assert_eq!(shell.session().profile().modes.len(), 4);
    }
}
