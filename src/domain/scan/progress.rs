// SPDX-License-Identifier: MPL-2.0
//! Progress newtype for timed visual transitions.

/// Transition progress, guaranteed to be within `[0, 1]`.
///
/// # Example
///
/// ```
/// use smart_scan::domain::scan::Progress;
///
/// let p = Progress::new(0.25);
/// assert_eq!(p.value(), 0.25);
///
/// // Values outside range are clamped
/// assert_eq!(Progress::new(1.7).value(), 1.0);
/// assert_eq!(Progress::new(-3.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    pub const ZERO: Progress = Progress(0.0);
    pub const ONE: Progress = Progress(1.0);

    /// Creates a new progress value, clamping to `[0, 1]`. NaN maps to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true at exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Returns true at exactly one.
    #[must_use]
    pub fn is_one(self) -> bool {
        self.0 >= 1.0
    }

    /// Linear interpolation between `from` and `to` at this progress.
    #[must_use]
    pub fn lerp(self, from: f32, to: f32) -> f32 {
        from + (to - from) * self.0
    }
}
