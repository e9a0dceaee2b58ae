// SPDX-License-Identifier: MPL-2.0
//! Page header with section navigation and the language switcher.

use crate::app::Section;
use crate::i18n::{Dictionary, Locale};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::language_switcher::{self, ViewContext as SwitcherViewContext};
use iced::{
    alignment::Vertical,
    widget::{button, container, Button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
    pub locale: Locale,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    JumpTo(Section),
    Switcher(language_switcher::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    JumpTo(Section),
    LocaleSelected(Locale),
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::JumpTo(section) => Event::JumpTo(section),
        Message::Switcher(language_switcher::Message::LocaleSelected(locale)) => {
            Event::LocaleSelected(locale)
        }
    }
}

/// Render the header bar.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new("Luedan")
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_600);

    let nav = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(nav_button(ctx.t.header.about, Section::About))
        .push(nav_button(ctx.t.header.skills, Section::Skills))
        .push(nav_button(ctx.t.header.experience, Section::Experience))
        .push(nav_button(ctx.t.header.contact, Section::Contact));

    let switcher =
        language_switcher::view(SwitcherViewContext { locale: ctx.locale }).map(Message::Switcher);

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(nav).width(Length::Fill).center_x(Length::Fill))
        .push(switcher);

    Container::new(bar)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn nav_button(label: &str, section: Section) -> Element<'_, Message> {
    Button::new(Text::new(label).size(typography::BODY))
        .style(button::text)
        .on_press(Message::JumpTo(section))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary_for, DEFAULT_LOCALE};

    #[test]
    fn header_view_renders() {
        let ctx = ViewContext {
            t: dictionary_for(DEFAULT_LOCALE),
            locale: DEFAULT_LOCALE,
        };
        let _element = view(ctx);
    }

    #[test]
    fn nav_click_emits_jump_event() {
        let event = update(Message::JumpTo(Section::Skills));
        assert!(matches!(event, Event::JumpTo(Section::Skills)));
    }

    #[test]
    fn switcher_click_emits_locale_event() {
        let event = update(Message::Switcher(
            language_switcher::Message::LocaleSelected(Locale::En),
        ));
        assert!(matches!(event, Event::LocaleSelected(Locale::En)));
    }
}
