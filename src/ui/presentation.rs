// SPDX-License-Identifier: MPL-2.0
//! Iced-side [`ScreenHost`]: remembers what the shell asked to show so the
//! view functions can render it.
//!
//! Camera content is a pure function of mode and step ([`scene`]); the
//! presentation only stores the latest instruction of each kind.

use crate::application::port::ScreenHost;
use crate::domain::scan::{Mode, ResultKind, Step};
use crate::ui::design_tokens::palette;
use crate::ui::widgets::scan_frame::FrameShape;
use iced::Color;

/// Sample photo behind the camera overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    FoodPhoto,
    RecipePhoto,
    BarcodePhoto,
    MenuPhoto,
    RecipeFocus,
    MenuFocus,
}

impl Backdrop {
    /// Asset key of the photo.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Backdrop::FoodPhoto => "food-photo",
            Backdrop::RecipePhoto => "recipe-photo",
            Backdrop::BarcodePhoto => "barcode-photo",
            Backdrop::MenuPhoto => "menu-photo",
            Backdrop::RecipeFocus => "recipe-focus",
            Backdrop::MenuFocus => "menu-focus",
        }
    }

    /// Placeholder tone painted instead of the photo.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Backdrop::FoodPhoto => palette::BACKDROP_FOOD,
            Backdrop::RecipePhoto => palette::BACKDROP_RECIPE,
            Backdrop::BarcodePhoto => palette::BACKDROP_BARCODE,
            Backdrop::MenuPhoto => palette::BACKDROP_MENU,
            Backdrop::RecipeFocus | Backdrop::MenuFocus => palette::BACKDROP_FOCUS,
        }
    }
}

/// Text shown over the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    /// Dark tooltip with a hint, step 1.
    Tooltip(&'static str),
    /// Green pill naming the detected subject, from step 2.
    Detected(&'static str),
}

impl Caption {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Caption::Tooltip(key) | Caption::Detected(key) => key,
        }
    }
}

/// Everything the camera area needs for one mode and step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub mode: Mode,
    pub step: Step,
    pub backdrop: Backdrop,
    pub frame: FrameShape,
    pub caption: Caption,
}

/// Camera content for `mode` at `step`.
#[must_use]
pub fn scene(mode: Mode, step: Step) -> Scene {
    let detected = step >= Step::Detected;
    let backdrop = match (mode, detected) {
        (Mode::Recipe, true) => Backdrop::RecipeFocus,
        (Mode::Menu, true) => Backdrop::MenuFocus,
        (Mode::Recipe, false) => Backdrop::RecipePhoto,
        (Mode::Menu, false) => Backdrop::MenuPhoto,
        (Mode::Barcode, _) => Backdrop::BarcodePhoto,
        (Mode::Food | Mode::Auto, _) => Backdrop::FoodPhoto,
    };
    let caption = if detected {
        Caption::Detected(match mode {
            Mode::Barcode => "detected-barcode",
            Mode::Recipe => "detected-recipe",
            Mode::Menu => "detected-menu",
            Mode::Food | Mode::Auto => "detected-food",
        })
    } else {
        Caption::Tooltip(match mode {
            Mode::Auto => "tooltip-auto",
            Mode::Recipe => "tooltip-recipe",
            Mode::Food => "tooltip-food",
            Mode::Menu => "tooltip-menu",
            Mode::Barcode => "tooltip-barcode",
        })
    };
    let frame = if mode.is_barcode() {
        FrameShape::BarcodeBox
    } else {
        FrameShape::Brackets
    };
    Scene {
        mode,
        step,
        backdrop,
        frame,
        caption,
    }
}

#[derive(Debug, Clone)]
pub struct Presentation {
    scene: Scene,
    tabs: Vec<Mode>,
    highlighted: Mode,
    result: Option<ResultKind>,
    sheet_visible: bool,
    sheet_scanned: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            scene: scene(Mode::Auto, Step::Scanning),
            tabs: Vec::new(),
            highlighted: Mode::Auto,
            result: None,
            sheet_visible: false,
            sheet_scanned: false,
        }
    }
}

impl Presentation {
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene
    }

    #[must_use]
    pub fn tabs(&self) -> &[Mode] {
        &self.tabs
    }

    #[must_use]
    pub fn highlighted(&self) -> Mode {
        self.highlighted
    }

    /// Result screen mounted in the drawer.
    #[must_use]
    pub fn result(&self) -> Option<ResultKind> {
        self.result
    }

    #[must_use]
    pub fn is_sheet_visible(&self) -> bool {
        self.sheet_visible
    }

    #[must_use]
    pub fn is_sheet_scanned(&self) -> bool {
        self.sheet_scanned
    }
}

impl ScreenHost for Presentation {
    fn render(&mut self, mode: Mode, step: Step) {
        self.scene = scene(mode, step);
    }

    fn render_result(&mut self, kind: ResultKind) {
        self.result = Some(kind);
    }

    fn unmount_result(&mut self) {
        self.result = None;
    }

    fn render_tabs(&mut self, modes: &[Mode], highlighted: Mode) {
        if self.tabs != modes {
            self.tabs = modes.to_vec();
        }
        self.highlighted = highlighted;
    }

    fn render_sheet(&mut self, visible: bool, scanned: bool) {
        self.sheet_visible = visible;
        self.sheet_scanned = scanned;
    }
}
