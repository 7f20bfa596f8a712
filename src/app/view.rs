// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Stacks the version switcher, an optional config warning and the phone
//! frame, centered in the window.

use super::Message;
use crate::application::shell::AppShell;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::phone::{self, ViewContext as PhoneViewContext};
use crate::ui::presentation::Presentation;
use crate::ui::styles;
use crate::ui::version_switcher::{self, ViewContext as SwitcherViewContext};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub shell: &'a AppShell<Presentation>,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let switcher = version_switcher::view(SwitcherViewContext {
        i18n: ctx.i18n,
        current: ctx.shell.version(),
    })
    .map(Message::SelectVersion);

    let phone = phone::view(&PhoneViewContext {
        i18n: ctx.i18n,
        presentation: ctx.shell.host(),
        session: ctx.shell.session(),
    })
    .map(Message::Tap);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(switcher);
    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }
    column = column.push(phone);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top)
        .padding(spacing::SM)
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(i18n.tr(key)).size(typography::CAPTION))
        .push(
            button(text("×").size(typography::BODY))
                .padding([0.0, spacing::XS])
                .style(styles::button::invisible)
                .on_press(Message::DismissWarning),
        );
    Container::new(content)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::warning)
        .into()
}
