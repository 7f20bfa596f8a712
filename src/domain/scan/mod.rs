// SPDX-License-Identifier: MPL-2.0
//! Scan prototype state machines.
//!
//! Every animation is a [`TransitionClock`] advanced by the caller with an
//! explicit `dt`, so the whole module runs without a wall clock or a
//! renderer. A [`Session`] owns one version's [`ModeSwitcher`],
//! [`ScanFlowController`] and [`SheetState`] and publishes [`ScanEvent`]s in
//! the order they happen.

mod clock;
mod event;
mod flow;
mod mode;
mod mode_switcher;
mod profile;
mod progress;
mod session;
mod sheet;
pub mod visuals;

pub use clock::{Delay, Target, TransitionClock};
pub use event::ScanEvent;
pub use flow::{DrawerPhase, DrawerState, FlashPhase, FlowTimer, Phase, ScanFlowController};
pub use mode::{Mode, ResultKind, Step, Version};
pub use mode_switcher::{BlurPhase, ModeSwitcher, Request};
pub use profile::{BlurCurve, LayoutShift, Timing, VersionProfile};
pub use progress::Progress;
pub use session::Session;
pub use sheet::SheetState;
