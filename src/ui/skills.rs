// SPDX-License-Identifier: MPL-2.0
//! Skills section: four skill categories laid out as a two-by-two card grid.

use crate::i18n::dictionary::SkillCategory;
use crate::i18n::Dictionary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::primitives::{bullet, card, section_title};
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the skills section.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
}

/// Render the skills section.
#[must_use]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let skills = &ctx.t.skills;

    let top_row = Row::new()
        .spacing(spacing::MD)
        .push(category_card(&skills.backend))
        .push(category_card(&skills.frontend));
    let bottom_row = Row::new()
        .spacing(spacing::MD)
        .push(category_card(&skills.cloud))
        .push(category_card(&skills.databases));

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_title(skills.title))
        .push(top_row)
        .push(bottom_row);

    Container::new(content)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn category_card<'a, M: 'a>(category: &'a SkillCategory) -> Element<'a, M> {
    let title = Text::new(category.title)
        .size(typography::TITLE_SM)
        .color(palette::ACCENT_600);

    let mut items = Column::new().spacing(spacing::XS).push(title);
    for item in category.items {
        items = items.push(bullet('▸', item));
    }

    Container::new(card(items.into()))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary_for, Locale};

    #[test]
    fn skills_view_renders_for_both_locales() {
        for locale in Locale::ALL {
            let ctx = ViewContext {
                t: dictionary_for(locale),
            };
            let _element: Element<'_, ()> = view(ctx);
        }
    }

    #[test]
    fn every_category_has_items() {
        for locale in Locale::ALL {
            let skills = &dictionary_for(locale).skills;
            for category in [
                &skills.backend,
                &skills.frontend,
                &skills.cloud,
                &skills.databases,
            ] {
                assert!(!category.items.is_empty());
            }
        }
    }
}
