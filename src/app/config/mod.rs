// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[prototype]` - Version shown at startup and animation time scale
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `SMART_SCAN_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use smart_scan::app::config::{self, PrototypeVersion};
//!
//! let (mut config, _warning) = config::load();
//! config.prototype.version = Some(PrototypeVersion::B);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::scan::Version;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Prototype version as written in `settings.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrototypeVersion {
    #[default]
    A,
    B,
}

impl From<PrototypeVersion> for Version {
    fn from(value: PrototypeVersion) -> Self {
        match value {
            PrototypeVersion::A => Version::A,
            PrototypeVersion::B => Version::B,
        }
    }
}

impl From<Version> for PrototypeVersion {
    fn from(value: Version) -> Self {
        match value {
            Version::A => PrototypeVersion::A,
            Version::B => PrototypeVersion::B,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Prototype playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrototypeConfig {
    /// Version mounted at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<PrototypeVersion>,

    /// Animation playback speed multiplier.
    #[serde(default = "default_time_scale", skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<f32>,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            version: Some(PrototypeVersion::default()),
            time_scale: default_time_scale(),
        }
    }
}

impl PrototypeConfig {
    /// Startup version, `A` when unset.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version.unwrap_or_default().into()
    }

    /// Time scale clamped to the supported range. Non-finite values fall
    /// back to the default.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        clamp_time_scale(self.time_scale.unwrap_or(DEFAULT_TIME_SCALE))
    }
}

/// Clamps a playback speed to `MIN_TIME_SCALE..=MAX_TIME_SCALE`.
#[must_use]
pub fn clamp_time_scale(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
    } else {
        DEFAULT_TIME_SCALE
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Prototype playback settings.
    #[serde(default)]
    pub prototype: PrototypeConfig,
}

fn default_time_scale() -> Option<f32> {
    Some(DEFAULT_TIME_SCALE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
