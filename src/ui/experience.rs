// SPDX-License-Identifier: MPL-2.0
//! Experience section: professional profile, security, and architecture
//! columns, followed by the working-mindset card.

use crate::i18n::Dictionary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::primitives::{bullet, card, section_title};
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the experience section.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
}

/// Render the experience section.
#[must_use]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let profile = &ctx.t.profile;

    let columns = Row::new()
        .spacing(spacing::MD)
        .push(titled_card(profile.title, profile.roles, '✓'))
        .push(titled_card(ctx.t.security.title, ctx.t.security.items, '✓'))
        .push(titled_card(
            ctx.t.architecture.title,
            ctx.t.architecture.items,
            '✓',
        ));

    let mindset_title = Text::new(profile.mindset.title)
        .size(typography::TITLE_SM)
        .color(palette::PRIMARY_600);
    let mindset_description = Text::new(profile.mindset.description)
        .size(typography::BODY)
        .color(palette::GRAY_700);
    let mut mindset = Column::new()
        .spacing(spacing::XS)
        .push(mindset_title)
        .push(mindset_description);
    for point in profile.mindset.points {
        mindset = mindset.push(bullet('•', point));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_title(ctx.t.header.experience))
        .push(columns)
        .push(card(mindset.into()));

    Container::new(content)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn titled_card<'a, M: 'a>(
    title: &'a str,
    items: &'a [&'a str],
    marker: char,
) -> Element<'a, M> {
    let heading = Text::new(title)
        .size(typography::TITLE_SM)
        .color(palette::GRAY_900);

    let mut column = Column::new().spacing(spacing::XS).push(heading);
    for item in items {
        column = column.push(bullet(marker, item));
    }

    card(column.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary_for, Locale};

    #[test]
    fn experience_view_renders_for_both_locales() {
        for locale in Locale::ALL {
            let ctx = ViewContext {
                t: dictionary_for(locale),
            };
            let _element: Element<'_, ()> = view(ctx);
        }
    }
}
