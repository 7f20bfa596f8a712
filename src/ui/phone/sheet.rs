// SPDX-License-Identifier: MPL-2.0
//! Search sheet pinned to the bottom of the phone while barcode mode is
//! committed. It slides by growing its clipped height.

use super::ViewContext;
use crate::application::shell::Tap;
use crate::domain::scan::visuals::sheet_offset;
use crate::domain::scan::{Session, Version};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Score shown on the scanned item.
pub const BARCODE_SCORE: u32 = 4;

/// Servings of the scanned item.
pub const BARCODE_SERVINGS: u32 = 2;

/// Visible height of the sheet at the current slide progress.
#[must_use]
pub fn visible_height(session: &Session) -> f32 {
    let height = session.profile().sheet_height;
    (height - sheet_offset(session.sheet_progress(), height)).max(0.0)
}

/// Score badge shared with the result screens.
pub fn score_badge<'a, M: 'a>(score: u32) -> Element<'a, M> {
    Container::new(
        text(score.to_string())
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .width(Length::Fixed(sizing::SCORE_BADGE))
    .height(Length::Fixed(sizing::SCORE_BADGE))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::score_badge)
    .into()
}

fn preview_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("result-barcode-name")).size(typography::TITLE_SM))
        .push(
            text(ctx.i18n.tr_count(
                "result-barcode-meta",
                "servings",
                BARCODE_SERVINGS,
            ))
            .size(typography::CAPTION),
        )
        .push(
            text(ctx.i18n.tr("sheet-preview-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill);

    button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(score_badge(BARCODE_SCORE))
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::preview_card)
    .on_press(Tap::PreviewCard)
    .into()
}

fn search<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let field = Container::new(
        text(ctx.i18n.tr("sheet-search-placeholder"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .align_y(Vertical::Center)
    .style(styles::container::search_field);

    let mut content = Column::new().spacing(spacing::XS);
    if ctx.session.profile().version == Version::A {
        content = content
            .push(text(ctx.i18n.tr("sheet-prompt")).size(typography::TITLE_SM))
            .push(
                text(ctx.i18n.tr("sheet-search-manually"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_700),
            );
    }
    content.push(field).into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Tap> {
    let height = visible_height(ctx.session);
    if height <= 0.0 {
        return Space::new().into();
    }

    let body = if ctx.presentation.is_sheet_scanned() {
        preview_card(ctx)
    } else {
        search(ctx)
    };

    let sheet = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(spacing::MD)
        .clip(true)
        .style(styles::container::sheet);

    Column::new()
        .push(Space::new().height(Length::Fill))
        .push(sheet)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{Mode, VersionProfile};
    use crate::test_utils::{assert_abs_diff_eq, ms};

    #[test]
    fn hidden_sheet_has_no_height() {
        let session = Session::new(VersionProfile::version_a());
        assert_abs_diff_eq!(visible_height(&session), 0.0);
    }

    #[test]
    fn sheet_grows_to_version_height_in_barcode() {
        let mut session = Session::new(VersionProfile::version_b());
        session.request_mode_change(Mode::Barcode);
        session.advance(ms(2000));
        assert!(session.is_sheet_visible());
        assert_abs_diff_eq!(visible_height(&session), 130.0);
    }
}
