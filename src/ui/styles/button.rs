// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action on result screens.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_700,
        _ => palette::BRAND_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary outlined action.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_100,
        _ => WHITE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BRAND_700,
        border: Border {
            color: palette::BRAND_500,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Mode tab inside the pill. The highlighted tab gets a solid white chip.
pub fn mode_tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (Some(Background::Color(WHITE)), palette::GRAY_900)
        } else if matches!(status, button::Status::Hovered) {
            (
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                })),
                WHITE,
            )
        } else {
            (None, WHITE)
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round shutter. `alpha` follows the layout shift so it fades out in barcode mode.
pub fn shutter(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Pressed => palette::GRAY_200,
            _ => WHITE,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..fill })),
            text_color: BLACK,
            border: Border {
                color: Color {
                    a: alpha * opacity::OVERLAY_STRONG,
                    ..WHITE
                },
                width: 4.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless button with no background, for inline icons.
pub fn invisible(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Segment of the version switcher above the phone.
pub fn segment(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let background = if selected {
            palette.primary.base.color
        } else if matches!(status, button::Status::Hovered) {
            palette.background.strong.color
        } else {
            palette.background.weak.color
        };
        let text_color = if selected {
            palette.primary.base.text
        } else {
            palette.background.base.text
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Close control in the result screen header.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_200
        })),
        text_color: palette::GRAY_900,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Scanned item card in the search sheet.
pub fn preview_card(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_500,
        _ => palette::GRAY_200,
    };
    button::Style {
        background: Some(Background::Color(WHITE)),
        text_color: palette::GRAY_900,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tab_is_opaque_white() {
        let style = mode_tab(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
        assert_eq!(style.text_color, palette::GRAY_900);
    }

    #[test]
    fn idle_tab_has_no_background() {
        let style = mode_tab(false)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn hidden_shutter_is_transparent() {
        let style = shutter(0.0)(&Theme::Light, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
