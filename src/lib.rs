// SPDX-License-Identifier: MPL-2.0
//! `smart_scan` renders an interactive prototype of a mobile scan application.
//!
//! The interesting part is not the static screens but the transition engine
//! that sequences them: mode switches with a blur-out/swap/blur-in ramp, a
//! three-step scan flow with shutter flash, loading spinner and result drawer,
//! and a search sheet that follows the barcode mode.
//!
//! # Layers
//!
//! - [`domain`] - the pure transition core (clocks, state machines, profiles)
//! - [`application`] - the shell that mounts one session per app version and
//!   forwards its events to a [`ScreenHost`](application::port::ScreenHost)
//! - [`app`] / [`ui`] - the Iced front end that hosts the prototype
//! - [`i18n`] - Fluent localization of every on-screen string

#![doc(html_root_url = "https://docs.rs/smart_scan/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
