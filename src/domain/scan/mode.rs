// SPDX-License-Identifier: MPL-2.0
//! Scan modes, flow steps, result kinds and app versions.

use std::fmt;

/// Scan category selected with the mode tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Barcode,
    Food,
    Auto,
    Recipe,
    Menu,
}

impl Mode {
    /// Returns true for the mode that owns the two-stage barcode reveal,
    /// the layout shift and the search sheet.
    #[must_use]
    pub fn is_barcode(self) -> bool {
        matches!(self, Mode::Barcode)
    }

    /// Result screen mounted when a scan in this mode completes.
    ///
    /// Auto mode recognises a plate of food, so it shares the food result.
    #[must_use]
    pub fn result_kind(self) -> ResultKind {
        match self {
            Mode::Barcode => ResultKind::Barcode,
            Mode::Food | Mode::Auto => ResultKind::Food,
            Mode::Recipe => ResultKind::Recipe,
            Mode::Menu => ResultKind::Menu,
        }
    }

    /// Returns the i18n key of the tab label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Mode::Barcode => "mode-barcode",
            Mode::Food => "mode-food",
            Mode::Auto => "mode-auto",
            Mode::Recipe => "mode-recipe",
            Mode::Menu => "mode-menu",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Barcode => "Barcode",
            Mode::Food => "Food",
            Mode::Auto => "Auto",
            Mode::Recipe => "Recipe",
            Mode::Menu => "Menu",
        };
        f.write_str(name)
    }
}

/// Position within one scan session.
///
/// Only ever advances one step at a time; any reset goes back to `Scanning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Scanning = 1,
    Detected = 2,
    Resulting = 3,
}

impl Step {
    /// Numeric position (1, 2 or 3).
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The following step, or `None` from `Resulting`.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Scanning => Some(Step::Detected),
            Step::Detected => Some(Step::Resulting),
            Step::Resulting => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Scanning => "scanning",
            Step::Detected => "detected",
            Step::Resulting => "resulting",
        };
        write!(f, "{}({})", name, self.number())
    }
}

/// Named result screen mounted inside the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Barcode,
    Food,
    Recipe,
    Menu,
}

impl ResultKind {
    /// Prefix shared by all i18n keys of this screen (`result-food-title`, ...).
    #[must_use]
    pub fn i18n_prefix(self) -> &'static str {
        match self {
            ResultKind::Barcode => "result-barcode",
            ResultKind::Food => "result-food",
            ResultKind::Recipe => "result-recipe",
            ResultKind::Menu => "result-menu",
        }
    }
}

/// One of the two mutually exclusive prototype configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    #[default]
    A,
    B,
}

impl Version {
    pub const ALL: [Version; 2] = [Version::A, Version::B];

    /// Returns the i18n key of the version switcher label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Version::A => "version-a",
            Version::B => "version-b",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::A => f.write_str("A"),
            Version::B => f.write_str("B"),
        }
    }
}
