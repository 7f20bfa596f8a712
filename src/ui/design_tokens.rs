// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the prototype's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the placeholder tones of the camera backdrops
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes inside the phone frame
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use smart_scan::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.94);

    // Brand colors (green scale)
    pub const BRAND_100: Color = Color::from_rgb(0.88, 0.96, 0.9);
    pub const BRAND_500: Color = Color::from_rgb(0.204, 0.659, 0.325);
    pub const BRAND_700: Color = Color::from_rgb(0.1, 0.45, 0.2);

    // Dark band behind the camera controls
    pub const CONTROLS: Color = Color::from_rgb(0.031, 0.027, 0.047);
    pub const HOME_BAR: Color = Color::from_rgb(0.196, 0.196, 0.196);

    // Score badge
    pub const SCORE_BLUE: Color = Color::from_rgb(0.16, 0.42, 0.86);

    // Camera backdrops stand in for the sample photos
    pub const BACKDROP_FOOD: Color = Color::from_rgb(0.45, 0.32, 0.2);
    pub const BACKDROP_RECIPE: Color = Color::from_rgb(0.55, 0.5, 0.42);
    pub const BACKDROP_BARCODE: Color = Color::from_rgb(0.35, 0.38, 0.42);
    pub const BACKDROP_MENU: Color = Color::from_rgb(0.3, 0.22, 0.18);
    pub const BACKDROP_FOCUS: Color = Color::from_rgb(0.6, 0.56, 0.48);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Dark scrim over the camera backdrop outside barcode mode.
    pub const CAMERA_SCRIM: f32 = 0.15;

    /// Stronger scrim around the barcode box.
    pub const BARCODE_SCRIM: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    /// Outer diameter of the shutter control.
    pub const SHUTTER: f32 = 72.0;

    /// Inner disc of the shutter.
    pub const SHUTTER_INNER: f32 = 58.0;

    /// Gallery thumbnail next to the tabs.
    pub const GALLERY: f32 = 30.0;

    /// Header above the camera preview.
    pub const HEADER_HEIGHT: f32 = 140.0;

    /// Dark controls band below the camera preview.
    pub const CONTROLS_HEIGHT: f32 = 218.0;

    pub const HOME_BAR_WIDTH: f32 = 135.0;
    pub const HOME_BAR_HEIGHT: f32 = 5.0;

    /// Barcode box cut out of the camera scrim.
    pub const BARCODE_BOX_WIDTH: f32 = 280.0;
    pub const BARCODE_BOX_HEIGHT: f32 = 140.0;

    /// Square framed by the corner brackets.
    pub const BRACKETS: f32 = 260.0;

    pub const SCORE_BADGE: f32 = 28.0;
    pub const BUTTON_HEIGHT: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Result screen product name
    pub const TITLE_LG: f32 = 26.0;

    /// Header title
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 17.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    /// Phone frame corners.
    pub const PHONE: f32 = 48.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CAMERA_SCRIM < opacity::BARCODE_SCRIM);

    assert!(sizing::SHUTTER > sizing::SHUTTER_INNER);
    assert!(sizing::SHUTTER_INNER > sizing::GALLERY);
    assert!(
        sizing::HEADER_HEIGHT + sizing::CONTROLS_HEIGHT < crate::domain::scan::visuals::PHONE_HEIGHT
    );
    assert!(sizing::BRACKETS < crate::domain::scan::visuals::PHONE_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
