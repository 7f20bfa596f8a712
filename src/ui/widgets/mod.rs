// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets.

pub mod animated_spinner;
pub mod scan_frame;
