// SPDX-License-Identifier: MPL-2.0
//! User interface of the prototype window.
//!
//! Follows the Elm-style "state down, messages up" pattern: views borrow
//! the mounted session and the [`presentation::Presentation`] host, and
//! emit taps that the application routes back into the shell.
//!
//! # Screens
//!
//! - [`phone`] - Phone-frame mockup (camera, controls, sheet, result drawer)
//! - [`version_switcher`] - Segmented control selecting the prototype version
//!
//! # Shared Infrastructure
//!
//! - [`presentation`] - Screen host recording what the shell asked to show
//! - [`widgets`] - Custom Iced widgets (spinner, scan frame)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod phone;
pub mod presentation;
pub mod styles;
pub mod version_switcher;
pub mod widgets;
