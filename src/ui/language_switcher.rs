// SPDX-License-Identifier: MPL-2.0
//! Language switcher shown in the page header.
//!
//! Renders one button per supported locale with the active one highlighted.
//! It only emits a selection message; switching and persistence happen in
//! the application update loop.

use crate::i18n::Locale;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{button, Button, Row, Text},
    Element,
};

/// Contextual data needed to render the switcher.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub locale: Locale,
}

/// Messages emitted by the switcher.
#[derive(Debug, Clone)]
pub enum Message {
    LocaleSelected(Locale),
}

/// Render the switcher buttons.
#[must_use]
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS);

    for locale in Locale::ALL {
        let label = Text::new(locale.code().to_uppercase()).size(typography::BODY);
        let mut locale_button =
            Button::new(label).on_press(Message::LocaleSelected(locale));

        if ctx.locale == locale {
            locale_button = locale_button.style(button::primary); // Highlight current language
        } else {
            locale_button = locale_button.style(button::secondary);
        }

        row = row.push(locale_button);
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_for_both_locales() {
        for locale in Locale::ALL {
            let _element = view(ViewContext { locale });
        }
    }

    #[test]
    fn display_names_are_localized() {
        assert_eq!(Locale::Es.display_name(), "Español");
        assert_eq!(Locale::En.display_name(), "English");
    }
}
