// SPDX-License-Identifier: MPL-2.0
//! Dark controls band: shutter, gallery thumbnail and the mode tab pill.
//!
//! Positions are absolute top offsets inside the band. With a layout shift
//! the gallery and pill move up and the shutter fades while barcode mode is
//! entered. Without one the shutter and gallery are hidden in barcode mode
//! while the band keeps its height.

use super::ViewContext;
use crate::application::shell::Tap;
use crate::domain::scan::visuals::{control_offsets, ControlOffsets};
use crate::domain::scan::Session;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

/// Shutter top offset inside the band.
const SHUTTER_TOP: f32 = 32.0;

/// Gallery left offset inside the band.
const GALLERY_LEFT: f32 = 32.0;

/// Home indicator distance from the bottom edge.
const HOME_BAR_BOTTOM: f32 = 8.0;

/// Control offsets outside barcode mode.
pub const RESTING: ControlOffsets = ControlOffsets {
    gallery_top: 149.0,
    pill_top: 138.0,
    shutter_opacity: 1.0,
    gallery_visible: true,
};

/// Resting offsets with the shutter and gallery hidden.
pub const HIDDEN: ControlOffsets = ControlOffsets {
    shutter_opacity: 0.0,
    gallery_visible: false,
    ..RESTING
};

/// Current control offsets of `session`.
#[must_use]
pub fn offsets(session: &Session) -> ControlOffsets {
    match session.profile().layout_shift {
        Some(shift) => control_offsets(shift, session.layout_shift_progress()),
        None if session.committed_mode().is_barcode() => HIDDEN,
        None => RESTING,
    }
}

fn at_top<'a>(top: f32, content: impl Into<Element<'a, Tap>>) -> Element<'a, Tap> {
    Column::new()
        .push(Space::new().height(Length::Fixed(top)))
        .push(content)
        .width(Length::Fill)
        .into()
}

fn tab_pill<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let highlighted = ctx.presentation.highlighted();
    let tabs = ctx
        .presentation
        .tabs()
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &mode| {
            row.push(
                button(text(ctx.i18n.tr(mode.i18n_key())).size(typography::CAPTION))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::mode_tab(mode == highlighted))
                    .on_press(Tap::Mode(mode)),
            )
        });
    Container::new(
        Container::new(tabs)
            .padding(spacing::XXS)
            .style(styles::container::tab_pill),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let current = offsets(ctx.session);

    let shutter = button(
        Space::new()
            .width(Length::Fixed(sizing::SHUTTER_INNER))
            .height(Length::Fixed(sizing::SHUTTER_INNER)),
    )
    .width(Length::Fixed(sizing::SHUTTER))
    .height(Length::Fixed(sizing::SHUTTER))
    .style(styles::button::shutter(current.shutter_opacity))
    .on_press_maybe((current.shutter_opacity > 0.0).then_some(Tap::Shutter));

    let mut gallery = Row::new().push(Space::new().width(Length::Fixed(GALLERY_LEFT)));
    if current.gallery_visible {
        gallery = gallery.push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::GALLERY))
                .height(Length::Fixed(sizing::GALLERY))
                .style(styles::container::gallery),
        );
    }

    let home_bar = Column::new()
        .push(Space::new().height(Length::Fill))
        .push(
            Container::new(
                Container::new(Space::new())
                    .width(Length::Fixed(sizing::HOME_BAR_WIDTH))
                    .height(Length::Fixed(sizing::HOME_BAR_HEIGHT))
                    .style(styles::container::home_bar),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .push(Space::new().height(Length::Fixed(HOME_BAR_BOTTOM)))
        .height(Length::Fill);

    let layers = Stack::new()
        .push(at_top(
            SHUTTER_TOP,
            Container::new(shutter)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        ))
        .push(at_top(current.gallery_top, gallery))
        .push(at_top(current.pill_top, tab_pill(ctx)))
        .push(home_bar)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTROLS_HEIGHT))
        .style(styles::container::controls)
        .into()
}
