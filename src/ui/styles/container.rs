// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Solid fill with optional rounded corners.
fn fill(color: Color, corner: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outer phone body.
pub fn phone(_theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        border: Border {
            color: palette::GRAY_900,
            width: 8.0,
            radius: radius::PHONE.into(),
        },
        ..fill(palette::GRAY_100, radius::PHONE)
    }
}

/// Light header area above the camera.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_900),
        ..fill(palette::GRAY_100, 0.0)
    }
}

/// Camera backdrop in `color` at `alpha` (the mode-switch opacity).
pub fn backdrop(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| fill(Color { a: alpha, ..color }, radius::LG)
}

/// Uniform scrim. Also stands in for the blur during mode switches.
pub fn scrim(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| fill(Color { a: alpha, ..color }, 0.0)
}

/// Dark translucent tooltip on the camera.
pub fn tooltip(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WHITE),
        ..fill(
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            radius::FULL,
        )
    }
}

/// Green pill naming what was detected.
pub fn detected_pill(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WHITE),
        ..fill(palette::BRAND_500, radius::FULL)
    }
}

/// Translucent pill holding the mode tabs.
pub fn tab_pill(_theme: &Theme) -> container::Style {
    fill(
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        },
        radius::FULL,
    )
}

/// Bottom search sheet.
pub fn sheet(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_900),
        shadow: shadow::MD,
        ..fill(palette::WHITE, radius::LG)
    }
}

/// Fake text field in the search sheet.
pub fn search_field(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_400),
        ..fill(palette::GRAY_100, radius::MD)
    }
}

/// Full-height result screen sliding over the camera.
pub fn drawer(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_900),
        ..fill(palette::WHITE, radius::PHONE)
    }
}

/// Rounded section on a result screen.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..fill(palette::WHITE, radius::LG)
    }
}

/// Blue circle holding a score.
pub fn score_badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WHITE),
        ..fill(palette::SCORE_BLUE, radius::FULL)
    }
}

/// Gallery thumbnail next to the shutter.
pub fn gallery(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::WHITE,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..fill(palette::BACKDROP_FOOD, radius::MD)
    }
}

/// Panel behind a config warning.
pub fn warning(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WHITE),
        ..fill(palette::ERROR_500, radius::MD)
    }
}

/// Dark band holding shutter, gallery and tabs.
pub fn controls(_theme: &Theme) -> container::Style {
    fill(palette::CONTROLS, 0.0)
}

/// Home indicator at the bottom edge.
pub fn home_bar(_theme: &Theme) -> container::Style {
    fill(palette::HOME_BAR, radius::FULL)
}
