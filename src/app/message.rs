// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::shell::Tap;
use crate::domain::scan::Version;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A segment of the version switcher was pressed.
    SelectVersion(Version),
    /// A control inside the phone frame was pressed.
    Tap(Tap),
    /// Frame tick while any animation is running.
    Tick(Instant),
    /// The config warning banner was dismissed.
    DismissWarning,
}

/// Runtime flags passed in from the command line to bootstrap the app.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Start on version B regardless of the configured version.
    pub version_b: bool,
    /// Optional config directory override (for testing or portable deployments).
    pub config_dir: Option<String>,
    /// Optional animation playback speed overriding the configured one.
    pub time_scale: Option<f32>,
}
