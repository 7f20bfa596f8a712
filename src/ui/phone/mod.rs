// SPDX-License-Identifier: MPL-2.0
//! Phone-frame mockup: header, camera preview, controls, search sheet and
//! the result drawer, stacked in that order.
//!
//! Views emit [`Tap`]s; the application maps them into its own message type.

pub mod camera;
pub mod controls;
pub mod results;
pub mod sheet;

use crate::application::shell::Tap;
use crate::domain::scan::visuals::{PHONE_HEIGHT, PHONE_WIDTH};
use crate::domain::scan::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::presentation::Presentation;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{text, Column, Container, Stack};
use iced::{Element, Length};

/// Borrowed state every phone view reads from.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub presentation: &'a Presentation,
    pub session: &'a Session,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let base = Column::new()
        .push(header(ctx))
        .push(camera::view(ctx))
        .push(controls::view(ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .push(base)
        .push(sheet::view(ctx))
        .width(Length::Fill)
        .height(Length::Fill);
    if let Some(kind) = ctx.presentation.result() {
        layers = layers.push(results::view(ctx, kind));
    }

    Container::new(layers)
        .width(Length::Fixed(PHONE_WIDTH))
        .height(Length::Fixed(PHONE_HEIGHT))
        .clip(true)
        .style(styles::container::phone)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("header-title")).size(typography::TITLE_MD))
        .push(text(ctx.i18n.tr("header-subtitle")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding(spacing::LG)
        .align_y(Vertical::Bottom)
        .style(styles::container::header)
        .into()
}
