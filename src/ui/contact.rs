// SPDX-License-Identifier: MPL-2.0
//! Contact section.

use crate::i18n::Dictionary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::primitives::{card, section_title};
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contact address shown in the section; language-invariant.
const CONTACT_EMAIL: &str = "hola@luedan.dev";

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
}

/// Render the contact section.
#[must_use]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let contact = &ctx.t.contact;

    let description = Text::new(contact.description)
        .size(typography::BODY_LG)
        .color(palette::GRAY_700);

    let email = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!("{}:", contact.email_label))
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_600),
        )
        .push(Text::new(CONTACT_EMAIL).size(typography::BODY_LG));

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_title(contact.title))
        .push(card(
            Column::new()
                .spacing(spacing::SM)
                .push(description)
                .push(email)
                .into(),
        ));

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
    fn contact_view_renders_for_both_locales() {
        for locale in Locale::ALL {
            let ctx = ViewContext {
                t: dictionary_for(locale),
            };
            let _element: Element<'_, ()> = view(ctx);
        }
    }
}
