// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that presentation adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`screen_host`]: The passive renderer told what to show
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Host methods are infallible; the transition core has no error paths

pub mod screen_host;

pub use screen_host::ScreenHost;
