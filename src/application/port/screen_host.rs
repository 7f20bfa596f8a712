// SPDX-License-Identifier: MPL-2.0
//! Screen host port definition.
//!
//! The [`ScreenHost`] is the passive side of the prototype. It is told which
//! static screen to show and keeps no state the transition core depends on.
//! Animated values (blur, flash, drawer offset) are not pushed through this
//! port; renderers read them from the session each frame.

use crate::domain::scan::{Mode, ResultKind, Step};

/// Receives render instructions from the [`AppShell`](crate::application::shell::AppShell).
///
/// # Call order
///
/// - `render` is called when the committed mode or the step changes.
/// - `render_result` is called when a result screen is mounted, before its
///   drawer starts sliding in. `unmount_result` is called once the drawer has
///   slid out or the flow was reset.
/// - `render_tabs` is called whenever the highlighted tab may have moved.
pub trait ScreenHost {
    /// Selects the camera background and overlay for `mode` at `step`.
    fn render(&mut self, mode: Mode, step: Step);

    /// Mounts the result screen for `kind`.
    fn render_result(&mut self, kind: ResultKind);

    /// Removes the mounted result screen, if any.
    fn unmount_result(&mut self);

    /// Shows the mode tabs in order with `highlighted` selected.
    fn render_tabs(&mut self, modes: &[Mode], highlighted: Mode);

    /// Switches the search sheet between its search affordance and the
    /// scanned item preview card.
    fn render_sheet(&mut self, _visible: bool, _scanned: bool) {}
}
