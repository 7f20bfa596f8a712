// SPDX-License-Identifier: MPL-2.0
//! Segmented control above the phone that picks the mounted prototype
//! version.

use crate::domain::scan::Version;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the switcher.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Version,
}

/// Renders one segment per version. Emits the pressed version; the
/// selected segment emits nothing.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Version> {
    let segments = Version::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &version| {
            let selected = version == ctx.current;
            row.push(
                button(text(ctx.i18n.tr(version.i18n_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::segment(selected))
                    .on_press_maybe((!selected).then_some(version)),
            )
        });

    Container::new(segments)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::SM)
        .into()
}
