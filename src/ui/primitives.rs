// SPDX-License-Identifier: MPL-2.0
//! Small building blocks shared by the page sections: section titles,
//! bullet items, tag pills, and the card container.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::{
    widget::{container, Container, Text},
    Border, Element, Length, Theme,
};

/// Centered section heading in the brand color.
pub fn section_title<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Container::new(
        Text::new(label)
            .size(typography::TITLE_LG)
            .color(palette::PRIMARY_600),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// One bullet line with a marker character.
pub fn bullet<'a, M: 'a>(marker: char, label: &str) -> Element<'a, M> {
    Text::new(format!("{marker} {label}"))
        .size(typography::BODY)
        .color(palette::GRAY_700)
        .into()
}

/// Small pill used for language-invariant technology tags.
pub fn tag<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::GRAY_700),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::GRAY_100.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Rounded card surface wrapping a section block.
pub fn card<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::SURFACE_CARD.into()),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_render() {
        let _title: Element<'_, ()> = section_title("Skills");
        let _bullet: Element<'_, ()> = bullet('▸', "PostgreSQL");
        let _tag: Element<'_, ()> = tag("Rust");
        let _card: Element<'_, ()> = card(bullet('✓', "tested"));
    }
}
