// SPDX-License-Identifier: MPL-2.0
//! Pure progress-to-pixel and progress-to-opacity mappings.
//!
//! Nothing here owns state; renderers call these with the progress values
//! exposed by the session.

use super::profile::{BlurCurve, LayoutShift};
use super::progress::Progress;
use std::f32::consts::TAU;

/// Height of the phone frame, and the drawer's off-screen offset.
pub const PHONE_HEIGHT: f32 = 852.0;

/// Width of the phone frame.
pub const PHONE_WIDTH: f32 = 393.0;

/// Camera preview filter during a mode switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFilter {
    pub blur_px: f32,
    pub opacity: f32,
}

/// Blur radius and opacity of the camera preview at blur progress `p`.
#[must_use]
pub fn camera_filter(curve: BlurCurve, p: Progress) -> CameraFilter {
    CameraFilter {
        blur_px: p.value() * curve.max_blur_px,
        opacity: 1.0 - p.value() * curve.opacity_drop,
    }
}

/// Opacity of the white shutter flash overlay.
#[must_use]
pub fn flash_opacity(p: Progress) -> f32 {
    p.value()
}

/// Vertical offset of the result drawer: `PHONE_HEIGHT` when closed, 0 when open.
#[must_use]
pub fn drawer_offset(p: Progress) -> f32 {
    (1.0 - p.value()) * PHONE_HEIGHT
}

/// Vertical offset of the search sheet: its height when hidden, 0 in place.
#[must_use]
pub fn sheet_offset(p: Progress, sheet_height: f32) -> f32 {
    (1.0 - p.value()) * sheet_height
}

/// Spinner rotation in radians.
#[must_use]
pub fn spinner_angle(p: Progress) -> f32 {
    p.value() * TAU
}

/// Control positions driven by the layout shift progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlOffsets {
    pub gallery_top: f32,
    pub pill_top: f32,
    /// The shutter fades out as the controls move up.
    pub shutter_opacity: f32,
    pub gallery_visible: bool,
}

#[must_use]
pub fn control_offsets(shift: LayoutShift, p: Progress) -> ControlOffsets {
    ControlOffsets {
        gallery_top: p.lerp(shift.gallery_top.0, shift.gallery_top.1),
        pill_top: p.lerp(shift.pill_top.0, shift.pill_top.1),
        shutter_opacity: 1.0 - p.value(),
        gallery_visible: true,
    }
}
