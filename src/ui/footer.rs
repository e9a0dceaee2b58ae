// SPDX-License-Identifier: MPL-2.0
//! Page footer with the copyright line.

use crate::i18n::Dictionary;
use crate::ui::design_tokens::{palette, spacing, typography};
use chrono::Datelike;
use iced::{
    widget::{Container, Text},
    Element, Length,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
}

/// Render the footer.
#[must_use]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let year = chrono::Local::now().year();
    let line = Text::new(format!("© {year} Luedan. {}.", ctx.t.footer.rights))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Container::new(line)
        .padding([spacing::LG, spacing::LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
