// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`shell`]: The [`AppShell`](shell::AppShell) that mounts one scan session
//!   per prototype version and forwards its events to a screen host
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer implements application layer ports
//! - The shell only talks to the presentation through [`port::ScreenHost`]
//!
//! # Example
//!
//! ```ignore
//! use smart_scan::application::port::ScreenHost;
//! use smart_scan::application::shell::{AppShell, Tap};
//! use smart_scan::domain::scan::{Mode, Version};
//!
//! let mut shell = AppShell::new(MyHost::default(), Version::A);
//! shell.tap(Tap::Mode(Mode::Recipe));
//! shell.advance(std::time::Duration::from_millis(16));
//! ```

pub mod port;
pub mod shell;
