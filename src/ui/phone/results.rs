// SPDX-License-Identifier: MPL-2.0
//! Full-height result drawer with one screen per [`ResultKind`].
//!
//! The content is static sample data; only the drawer offset is animated.

use super::sheet::{score_badge, BARCODE_SCORE, BARCODE_SERVINGS};
use super::ViewContext;
use crate::application::shell::Tap;
use crate::domain::scan::visuals::drawer_offset;
use crate::domain::scan::ResultKind;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, rule, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// One row of the nutrition table.
#[derive(Debug, Clone, Copy)]
pub struct Nutrient {
    pub key: &'static str,
    pub amount: &'static str,
    /// Sub-rows (saturated fat, fiber, sugars) are indented.
    pub indented: bool,
}

/// A named item with a portion and a score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem {
    pub name: &'static str,
    pub detail: &'static str,
    pub score: u32,
}

pub const NUTRITION: [Nutrient; 9] = [
    Nutrient { key: "nutrient-calories", amount: "250 cal", indented: false },
    Nutrient { key: "nutrient-protein", amount: "14 g", indented: false },
    Nutrient { key: "nutrient-fat", amount: "15 g", indented: false },
    Nutrient { key: "nutrient-saturated-fat", amount: "3 g", indented: true },
    Nutrient { key: "nutrient-carbohydrates", amount: "15 g", indented: false },
    Nutrient { key: "nutrient-fiber", amount: "1 g", indented: true },
    Nutrient { key: "nutrient-total-sugar", amount: "0 g", indented: true },
    Nutrient { key: "nutrient-added-sugar", amount: "0 g", indented: true },
    Nutrient { key: "nutrient-weight", amount: "97 g", indented: false },
];

pub const FOOD_ITEMS: [ScoredItem; 4] = [
    ScoredItem { name: "Wegmans Travels of India Chicken Curry", detail: "1 package(s)", score: 2 },
    ScoredItem { name: "Cooked white rice", detail: "1 cup(s)", score: 2 },
    ScoredItem { name: "Sugar snap peas", detail: "¾ cup(s)", score: 2 },
    ScoredItem { name: "Sauteed vegetables", detail: "1⅛ cup(s)", score: 2 },
];

pub const INGREDIENTS: [ScoredItem; 6] = [
    ScoredItem { name: "Chicken breast", detail: "2 cups, diced", score: 2 },
    ScoredItem { name: "Carrots", detail: "3 medium, sliced", score: 0 },
    ScoredItem { name: "Egg noodles", detail: "200g", score: 3 },
    ScoredItem { name: "Celery", detail: "2 stalks, chopped", score: 0 },
    ScoredItem { name: "Butter", detail: "1 tbsp", score: 2 },
    ScoredItem { name: "Onion", detail: "1 medium, diced", score: 0 },
];

pub const MENU_ITEMS: [ScoredItem; 8] = [
    ScoredItem { name: "Garden Salad", detail: "Mixed greens, tomatoes, vinaigrette", score: 2 },
    ScoredItem { name: "Grilled Chicken Salad", detail: "Chicken breast, romaine, light dressing", score: 3 },
    ScoredItem { name: "Minestrone Soup", detail: "Vegetables, beans, pasta in broth", score: 4 },
    ScoredItem { name: "Margherita Pizza", detail: "Tomato sauce, mozzarella, basil", score: 7 },
    ScoredItem { name: "Chicken Parmesan", detail: "Breaded chicken, marinara, mozzarella", score: 9 },
    ScoredItem { name: "Spaghetti Bolognese", detail: "Beef ragu, spaghetti, parmesan", score: 11 },
    ScoredItem { name: "Fettuccine Alfredo", detail: "Cream sauce, parmesan, fettuccine", score: 14 },
    ScoredItem { name: "Deep Dish Pizza", detail: "Sausage, peppers, thick crust", score: 18 },
];

const RECIPE_SCORE: u32 = 4;
const RECIPE_PREP_MINUTES: u32 = 45;
const RECIPE_COOK_MINUTES: u32 = 45;
const RECIPE_SERVINGS: u32 = 6;

/// Items the menu scan claims to have found, more than the sample list shows.
const MENU_ITEM_COUNT: u32 = 12;

fn key(kind: ResultKind, suffix: &str) -> String {
    format!("{}-{}", kind.i18n_prefix(), suffix)
}

fn header<'a>(ctx: &ViewContext<'a>, kind: ResultKind) -> Element<'a, Tap> {
    let close = button(text(ctx.i18n.tr("result-close")).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::close)
        .on_press(Tap::CloseResult);

    let title = Container::new(text(ctx.i18n.tr(&key(kind, "title"))).size(typography::TITLE_SM))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Row::new()
        .align_y(Vertical::Center)
        .push(close)
        .push(title)
        .push(Space::new().width(Length::Fixed(sizing::BUTTON_HEIGHT)))
        .into()
}

fn summary<'a>(name: String, meta: String, score: Option<u32>) -> Element<'a, Tap> {
    let labels = Column::new()
        .spacing(spacing::XXS)
        .push(text(name).size(typography::TITLE_LG))
        .push(text(meta).size(typography::CAPTION).color(palette::GRAY_700))
        .width(Length::Fill);
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(labels);
    if let Some(score) = score {
        row = row.push(score_badge(score));
    }
    row.into()
}

fn section_title<'a>(label: String) -> Element<'a, Tap> {
    text(label).size(typography::TITLE_SM).into()
}

fn scored_row<'a>(item: &ScoredItem) -> Element<'a, Tap> {
    let labels = Column::new()
        .push(text(item.name).size(typography::BODY))
        .push(
            text(item.detail)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill);
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(labels)
        .push(score_badge(item.score))
        .into()
}

fn card<'a>(content: impl Into<Element<'a, Tap>>) -> Element<'a, Tap> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn scored_list<'a>(items: &[ScoredItem]) -> Element<'a, Tap> {
    let list = items
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, item| {
            column.push(scored_row(item))
        });
    card(list)
}

fn action<'a>(label: String) -> Element<'a, Tap> {
    button(
        Container::new(text(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .into()
}

fn barcode<'a>(ctx: &ViewContext<'a>) -> Column<'a, Tap> {
    let kind = ResultKind::Barcode;
    let serving = Row::new()
        .push(text(ctx.i18n.tr(&key(kind, "serving"))).width(Length::Fill))
        .push(text(ctx.i18n.tr_count("serving-count", "count", BARCODE_SERVINGS)));

    let nutrition = NUTRITION
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, row| {
            let indent = if row.indented { spacing::MD } else { 0.0 };
            column.push(
                Row::new()
                    .push(Space::new().width(Length::Fixed(indent)))
                    .push(
                        text(ctx.i18n.tr(row.key))
                            .size(typography::BODY)
                            .width(Length::Fill),
                    )
                    .push(text(row.amount).size(typography::BODY)),
            )
        });

    Column::new()
        .push(summary(
            ctx.i18n.tr(&key(kind, "name")),
            ctx.i18n.tr_count(&key(kind, "meta"), "servings", BARCODE_SERVINGS),
            Some(BARCODE_SCORE),
        ))
        .push(card(serving))
        .push(section_title(ctx.i18n.tr(&key(kind, "insights"))))
        .push(card(
            text(ctx.i18n.tr(&key(kind, "insight-fiber"))).size(typography::BODY),
        ))
        .push(section_title(ctx.i18n.tr(&key(kind, "nutrition"))))
        .push(card(nutrition))
        .push(action(ctx.i18n.tr(&key(kind, "action"))))
}

fn recipe<'a>(ctx: &ViewContext<'a>) -> Column<'a, Tap> {
    let kind = ResultKind::Recipe;
    let stat = |label: String, value: String| -> Column<'a, Tap> {
        Column::new()
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(text(value).size(typography::TITLE_SM))
            .push(text(label).size(typography::CAPTION).color(palette::GRAY_700))
    };
    let stats = Row::new()
        .push(stat(
            ctx.i18n.tr(&key(kind, "prep")),
            ctx.i18n.tr_count("minutes", "minutes", RECIPE_PREP_MINUTES),
        ))
        .push(stat(
            ctx.i18n.tr(&key(kind, "cook")),
            ctx.i18n.tr_count("minutes", "minutes", RECIPE_COOK_MINUTES),
        ))
        .push(stat(
            ctx.i18n.tr(&key(kind, "serves")),
            RECIPE_SERVINGS.to_string(),
        ));

    Column::new()
        .push(summary(
            ctx.i18n.tr(&key(kind, "name")),
            ctx.i18n.tr_count(&key(kind, "meta"), "servings", RECIPE_SERVINGS),
            Some(RECIPE_SCORE),
        ))
        .push(card(stats))
        .push(section_title(ctx.i18n.tr(&key(kind, "ingredients"))))
        .push(scored_list(&INGREDIENTS))
        .push(
            button(text(ctx.i18n.tr(&key(kind, "save"))).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::secondary),
        )
        .push(action(ctx.i18n.tr(&key(kind, "action"))))
}

fn menu<'a>(ctx: &ViewContext<'a>) -> Column<'a, Tap> {
    let kind = ResultKind::Menu;
    let toolbar = Row::new()
        .push(
            text(ctx.i18n.tr_count(&key(kind, "count"), "count", MENU_ITEM_COUNT))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            text(ctx.i18n.tr(&key(kind, "sort")))
                .size(typography::CAPTION)
                .color(palette::BRAND_700),
        );

    Column::new()
        .push(summary(
            ctx.i18n.tr(&key(kind, "name")),
            ctx.i18n.tr(&key(kind, "meta")),
            None,
        ))
        .push(toolbar)
        .push(scored_list(&MENU_ITEMS))
}

fn food<'a>(ctx: &ViewContext<'a>) -> Column<'a, Tap> {
    let kind = ResultKind::Food;
    let missing = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr(&key(kind, "missing"))).size(typography::BODY))
        .push(
            button(text(ctx.i18n.tr(&key(kind, "add"))).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        );

    Column::new()
        .push(summary(
            ctx.i18n.tr(&key(kind, "name")),
            ctx.i18n.tr(&key(kind, "title")),
            None,
        ))
        .push(scored_list(&FOOD_ITEMS))
        .push(card(missing))
        .push(action(ctx.i18n.tr(&key(kind, "action"))))
}

/// Drawer holding the result screen of `kind`, offset by the slide progress.
pub fn view<'a>(ctx: &ViewContext<'a>, kind: ResultKind) -> Element<'a, Tap> {
    let content = match kind {
        ResultKind::Barcode => barcode(ctx),
        ResultKind::Recipe => recipe(ctx),
        ResultKind::Menu => menu(ctx),
        ResultKind::Food => food(ctx),
    }
    .spacing(spacing::MD)
    .padding([0.0, spacing::LG]);

    let drawer = Column::new()
        .spacing(spacing::SM)
        .padding([spacing::LG, 0.0])
        .push(Container::new(header(ctx, kind)).padding([0.0, spacing::MD]))
        .push(rule::horizontal(1))
        .push(scrollable(content).height(Length::Fill));

    Column::new()
        .push(Space::new().height(Length::Fixed(drawer_offset(ctx.session.drawer_progress()))))
        .push(
            Container::new(drawer)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::drawer),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_keys_use_result_prefix() {
        assert_eq!(key(ResultKind::Recipe, "title"), "result-recipe-title");
        assert_eq!(key(ResultKind::Barcode, "insight-fiber"), "result-barcode-insight-fiber");
    }

    #[test]
    fn menu_items_are_sorted_by_score() {
        assert!(MENU_ITEMS.windows(2).all(|pair| pair[0].score <= pair[1].score));
        assert!(MENU_ITEM_COUNT as usize >= MENU_ITEMS.len());
    }

    #[test]
    fn nutrition_sub_rows_follow_their_parent() {
        assert!(!NUTRITION[0].indented);
        assert!(NUTRITION.iter().filter(|row| row.indented).count() == 4);
        assert_eq!(NUTRITION[3].key, "nutrient-saturated-fat");
    }
}
