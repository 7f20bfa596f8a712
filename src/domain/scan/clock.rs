// SPDX-License-Identifier: MPL-2.0
//! Timed value ramps and one-shot delays.
//!
//! Clocks never read wall time. The owner feeds elapsed time through
//! `advance`, which makes every transition deterministic under test and lets
//! the session step all clocks to their next deadline so completions are
//! observed in timestamp order.
//!
//! Completion callbacks are modelled as tokens: a run carries an optional
//! `C` that `advance` hands back exactly once when the target is reached.
//! A pre-empted, reset or stopped run drops its token silently.

use super::progress::Progress;
use std::time::Duration;

/// End point of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Zero,
    One,
}

impl Target {
    #[must_use]
    pub fn progress(self) -> Progress {
        match self {
            Target::Zero => Progress::ZERO,
            Target::One => Progress::ONE,
        }
    }
}

#[derive(Debug, Clone)]
struct Ramp<C> {
    from: f32,
    to: Progress,
    duration: Duration,
    elapsed: Duration,
    on_complete: Option<C>,
}

#[derive(Debug, Clone)]
enum Drive<C> {
    Idle,
    Ramp(Ramp<C>),
    Loop { period: Duration, elapsed: Duration },
}

/// Linear progress ramp with an optional completion token.
#[derive(Debug, Clone)]
pub struct TransitionClock<C> {
    progress: Progress,
    drive: Drive<C>,
}

impl<C> Default for TransitionClock<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TransitionClock<C> {
    /// Creates an idle clock at progress zero.
    #[must_use]
    pub fn new() -> Self {
        Self::settled(Target::Zero)
    }

    /// Creates an idle clock resting at `target`.
    #[must_use]
    pub fn settled(target: Target) -> Self {
        Self {
            progress: target.progress(),
            drive: Drive::Idle,
        }
    }

    /// Drives progress linearly from its current value to `target` over
    /// `duration`. Pre-empts any active run without firing its token.
    pub fn run(&mut self, target: Target, duration: Duration, on_complete: Option<C>) {
        self.drive = Drive::Ramp(Ramp {
            from: self.progress.value(),
            to: target.progress(),
            duration,
            elapsed: Duration::ZERO,
            on_complete,
        });
    }

    /// Repeats a 0→1 ramp of `period` until stopped or reset.
    pub fn start_loop(&mut self, period: Duration) {
        self.progress = Progress::ZERO;
        self.drive = Drive::Loop {
            period,
            elapsed: Duration::ZERO,
        };
    }

    /// Halts the clock where it stands. Idempotent, never fires a token.
    pub fn stop(&mut self) {
        self.drive = Drive::Idle;
    }

    /// Snaps progress to zero and cancels any run, without firing a token.
    pub fn reset(&mut self) {
        self.progress = Progress::ZERO;
        self.drive = Drive::Idle;
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns true while a ramp or loop is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !matches!(self.drive, Drive::Idle)
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        matches!(self.drive, Drive::Loop { .. })
    }

    /// Target of the active ramp, if any.
    #[must_use]
    pub fn target(&self) -> Option<Progress> {
        match &self.drive {
            Drive::Ramp(ramp) => Some(ramp.to),
            _ => None,
        }
    }

    /// Time until the active ramp completes. Loops never complete.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        match &self.drive {
            Drive::Ramp(ramp) => Some(ramp.duration.saturating_sub(ramp.elapsed)),
            Drive::Idle | Drive::Loop { .. } => None,
        }
    }

    /// Advances the clock by `dt`, returning the completion token if the
    /// active ramp reached its target during this step.
    pub fn advance(&mut self, dt: Duration) -> Option<C> {
        let finished = match &mut self.drive {
            Drive::Idle => false,
            Drive::Loop { period, elapsed } => {
                if !period.is_zero() {
                    let wrapped = (elapsed.as_nanos() + dt.as_nanos()) % period.as_nanos();
                    // wrapped < period, which fits in u64 nanoseconds
                    *elapsed = Duration::from_nanos(wrapped as u64);
                    self.progress =
                        Progress::new(elapsed.as_secs_f32() / period.as_secs_f32());
                }
                false
            }
            Drive::Ramp(ramp) => {
                ramp.elapsed = (ramp.elapsed + dt).min(ramp.duration);
                if ramp.elapsed >= ramp.duration {
                    true
                } else {
                    let t = ramp.elapsed.as_secs_f32() / ramp.duration.as_secs_f32();
                    self.progress = Progress::new(ramp.from + (ramp.to.value() - ramp.from) * t);
                    false
                }
            }
        };

        if !finished {
            return None;
        }
        match std::mem::replace(&mut self.drive, Drive::Idle) {
            Drive::Ramp(ramp) => {
                self.progress = ramp.to;
                ramp.on_complete
            }
            _ => None,
        }
    }
}

/// One-shot timer carrying a completion token.
#[derive(Debug, Clone)]
pub struct Delay<C> {
    pending: Option<(Duration, C)>,
}

impl<C> Default for Delay<C> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<C> Delay<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, replacing any pending one.
    pub fn start(&mut self, duration: Duration, token: C) {
        self.pending = Some((duration, token));
    }

    /// Disarms the timer without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(left, _)| *left)
    }

    /// Advances by `dt`, returning the token once the delay has elapsed.
    pub fn advance(&mut self, dt: Duration) -> Option<C> {
        let (left, _) = self.pending.as_mut()?;
        *left = left.saturating_sub(dt);
        if left.is_zero() {
            self.pending.take().map(|(_, token)| token)
        } else {
            None
        }
    }
}
