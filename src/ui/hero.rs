// SPDX-License-Identifier: MPL-2.0
//! Hero section: greeting, name, role, and the two calls to action.

use crate::app::Section;
use crate::i18n::Dictionary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the hero section.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
}

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    ViewSkills,
    Contact,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    JumpTo(Section),
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ViewSkills => Event::JumpTo(Section::Skills),
        Message::Contact => Event::JumpTo(Section::Contact),
    }
}

/// Render the hero section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let hero = &ctx.t.hero;

    let greeting = Text::new(hero.greeting)
        .size(typography::BODY_LG)
        .color(palette::GRAY_700);
    let name = Text::new(hero.name)
        .size(typography::DISPLAY)
        .color(palette::PRIMARY_600);
    let role = Text::new(hero.role)
        .size(typography::TITLE_MD)
        .color(palette::GRAY_900);
    let subtitle = Text::new(hero.subtitle)
        .size(typography::BODY_LG)
        .color(palette::GRAY_700);
    let description = Text::new(hero.description)
        .size(typography::BODY)
        .color(palette::GRAY_700);

    let cta = Button::new(Text::new(hero.cta).size(typography::BODY))
        .style(button::primary)
        .on_press(Message::ViewSkills);
    let contact = Button::new(Text::new(hero.contact).size(typography::BODY))
        .style(button::secondary)
        .on_press(Message::Contact);

    let actions = Row::new().spacing(spacing::MD).push(cta).push(contact);

    let content = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(greeting)
        .push(name)
        .push(role)
        .push(subtitle)
        .push(description)
        .push(actions);

    Container::new(content)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary_for, DEFAULT_LOCALE};

    #[test]
    fn hero_view_renders() {
        let ctx = ViewContext {
            t: dictionary_for(DEFAULT_LOCALE),
        };
        let _element = view(ctx);
    }

    #[test]
    fn cta_jumps_to_skills() {
        assert!(matches!(
            update(Message::ViewSkills),
            Event::JumpTo(Section::Skills)
        ));
    }

    #[test]
    fn contact_jumps_to_contact() {
        assert!(matches!(
            update(Message::Contact),
            Event::JumpTo(Section::Contact)
        ));
    }
}
