// SPDX-License-Identifier: MPL-2.0
//! Camera preview: backdrop, scan frame, caption, spinner and the two
//! transition overlays (mode-switch blur, shutter flash).
//!
//! Iced cannot blur arbitrary widgets, so the blur radius drives a frosted
//! veil whose strength grows with it.

use super::ViewContext;
use crate::application::shell::Tap;
use crate::domain::scan::visuals::{camera_filter, flash_opacity, spinner_angle, CameraFilter};
use crate::domain::scan::BlurCurve;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::presentation::{Caption, Scene};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use crate::ui::widgets::scan_frame::{FrameShape, ScanFrame};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, text, Column, Container, Space, Stack};
use iced::{Element, Length, Size};

/// Veil opacity at the blur peak.
const MAX_VEIL: f32 = 0.35;

/// Opacity of the frosted veil standing in for `filter.blur_px`.
#[must_use]
pub fn veil_alpha(filter: CameraFilter, curve: BlurCurve) -> f32 {
    if curve.max_blur_px <= 0.0 {
        return 0.0;
    }
    (filter.blur_px / curve.max_blur_px).clamp(0.0, 1.0) * MAX_VEIL
}

fn frame_size(shape: FrameShape) -> Size {
    match shape {
        FrameShape::Brackets => Size::new(sizing::BRACKETS, sizing::BRACKETS),
        FrameShape::BarcodeBox => Size::new(sizing::BARCODE_BOX_WIDTH, sizing::BARCODE_BOX_HEIGHT),
    }
}

fn caption<'a>(ctx: &ViewContext<'a>, caption: Caption) -> Element<'a, Tap> {
    let style = match caption {
        Caption::Tooltip(_) => styles::container::tooltip,
        Caption::Detected(_) => styles::container::detected_pill,
    };
    Container::new(text(ctx.i18n.tr(caption.i18n_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Tap>>) -> Element<'a, Tap> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn overlay<'a>(color: iced::Color, alpha: f32) -> Element<'a, Tap> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim(color, alpha))
        .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let scene: Scene = ctx.presentation.scene();
    let session = ctx.session;
    let curve = session.profile().blur;
    let filter = camera_filter(curve, session.blur_progress());

    let backdrop = Container::new(
        text(scene.backdrop.key())
            .size(typography::CAPTION)
            .color(iced::Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .style(styles::container::backdrop(scene.backdrop.color(), filter.opacity));

    let scrim_alpha = if scene.frame == FrameShape::BarcodeBox {
        opacity::BARCODE_SCRIM
    } else {
        opacity::CAMERA_SCRIM
    };

    let framed = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(caption(ctx, scene.caption))
        .push(ScanFrame::new(scene.frame, palette::WHITE, frame_size(scene.frame)).into_element());

    let mut layers = Stack::new()
        .push(backdrop)
        .push(overlay(palette::BLACK, scrim_alpha))
        .push(centered(framed))
        .width(Length::Fill)
        .height(Length::Fill);

    if session.is_spinner_running() {
        let spinner = AnimatedSpinner::new(palette::WHITE, spinner_angle(session.spinner_progress()))
            .into_element();
        let loading = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(text(ctx.i18n.tr("loading-label")).size(typography::CAPTION));
        layers = layers
            .push(overlay(palette::BLACK, opacity::OVERLAY_MEDIUM))
            .push(centered(loading));
    }

    let veil = veil_alpha(filter, curve);
    if veil > 0.0 {
        layers = layers.push(overlay(palette::WHITE, veil));
    }

    let flash = flash_opacity(session.flash_progress());
    if flash > 0.0 {
        layers = layers.push(overlay(palette::WHITE, flash));
    }

    mouse_area(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Tap::Camera)
    .into()
}
