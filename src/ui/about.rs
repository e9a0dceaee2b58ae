// SPDX-License-Identifier: MPL-2.0
//! About section: introduction and the list of defining points.

use crate::i18n::Dictionary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::primitives::{bullet, card, section_title};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
}

/// Render the about section. The section has no interactions, so it is
/// generic over the parent message type.
#[must_use]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let about = &ctx.t.about;

    let intro = Text::new(about.intro)
        .size(typography::BODY_LG)
        .color(palette::GRAY_700);
    let focus = Text::new(about.focus)
        .size(typography::BODY_LG)
        .color(palette::GRAY_900);

    let mut points = Column::new().spacing(spacing::XS);
    for point in about.points {
        points = points.push(bullet('•', point));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_title(about.title))
        .push(intro)
        .push(focus)
        .push(card(points.into()));

    Container::new(content)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary_for, Locale};

    #[test]
    fn about_view_renders_for_both_locales() {
        for locale in Locale::ALL {
            let ctx = ViewContext {
                t: dictionary_for(locale),
            };
            let _element: Element<'_, ()> = view(ctx);
        }
    }
}
