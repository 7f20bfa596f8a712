// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the version switcher
//! and the phone frame.
//!
//! The `App` struct wires together the shell (scan session plus screen host),
//! localization and settings, and translates iced messages into shell calls.
//! Animation time comes from a frame tick subscription that only runs while
//! a transition is in flight.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::shell::AppShell;
use crate::domain::scan::Version;
use crate::i18n::fluent::I18n;
use crate::ui::presentation::Presentation;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    shell: AppShell<Presentation>,
    /// Playback speed applied to wall-clock ticks.
    time_scale: f32,
    /// Timestamp of the previous tick of the current animation run.
    last_tick: Option<Instant>,
    /// i18n key of a startup warning shown above the phone.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("version", &self.shell.version())
            .field("mode", &self.shell.session().committed_mode())
            .field("time_scale", &self.time_scale)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 960;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 940;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, resolves the locale and mounts the startup version.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);

        let version = if flags.version_b {
            Version::B
        } else {
            config.prototype.version()
        };
        let time_scale = flags
            .time_scale
            .map_or_else(|| config.prototype.time_scale(), config::clamp_time_scale);

        tracing::info!(
            %version,
            time_scale,
            locale = %i18n.current_locale(),
            "prototype mounted"
        );

        let app = App {
            i18n,
            shell: AppShell::new(Presentation::default(), version),
            time_scale,
            last_tick: None,
            warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let version = self.i18n.tr(self.shell.version().i18n_key());
        format!("{version} - {app_name}")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.shell.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            shell: &mut self.shell,
            last_tick: &mut self.last_tick,
            time_scale: self.time_scale,
            warning: &mut self.warning,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            shell: &self.shell,
            warning: self.warning.as_deref(),
        })
    }
}
