// SPDX-License-Identifier: MPL-2.0
//! Observable transitions published by the state machines.
//!
//! Components push events into a caller-owned buffer as they happen, so the
//! buffer order is the order in which transitions took effect.

use super::mode::{Mode, ResultKind, Step, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// A mode change was accepted and the blur-in ramp started.
    ModeRequested { from: Mode, to: Mode },
    /// The highlighted tab moved ahead of the committed mode.
    HighlightChanged { mode: Mode },
    /// The blur-in reached its peak and the new mode is now rendered.
    ModeCommitted { mode: Mode },
    /// The blur-out finished; new mode changes are accepted again.
    TransitionFinished { mode: Mode },
    StepChanged { mode: Mode, step: Step },
    FlashStarted,
    FlashPeaked,
    LoadingStarted,
    FlashFaded,
    LoadingFinished,
    /// A result screen was mounted and its drawer started sliding in.
    DrawerMounted { kind: ResultKind },
    DrawerOpened,
    DrawerClosing,
    /// The drawer slid out and its result screen was unmounted.
    DrawerClosed,
    SheetVisibility { visible: bool },
    SheetScanned { scanned: bool },
    /// The scan flow was forced back to scanning, cancelling its timers.
    FlowReset { unmounted: Option<ResultKind> },
    VersionSelected { version: Version },
}
