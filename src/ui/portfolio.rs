// SPDX-License-Identifier: MPL-2.0
//! Portfolio section: one card per showcased project, with every bilingual
//! field resolved for the active locale.

use crate::content::{LinkLabel, LocalizedText, Project, PROJECTS};
use crate::i18n::{Dictionary, Locale};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::primitives::{bullet, card, section_title, tag};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the portfolio section.
pub struct ViewContext<'a> {
    pub t: &'a Dictionary,
    pub locale: Locale,
}

/// Render the portfolio section.
#[must_use]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let labels = &ctx.t.portfolio;

    let subtitle = Container::new(
        Text::new(labels.subtitle)
            .size(typography::BODY_LG)
            .color(palette::GRAY_700)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_title(labels.title))
        .push(subtitle);

    for project in PROJECTS {
        content = content.push(project_card(project, ctx.t, ctx.locale));
    }

    Container::new(content)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn project_card<'a, M: 'a>(
    project: &'a Project,
    t: &'a Dictionary,
    locale: Locale,
) -> Element<'a, M> {
    let labels = &t.portfolio;

    let title = Text::new(project.title)
        .size(typography::TITLE_MD)
        .color(palette::GRAY_900);
    let subtitle = Text::new(project.subtitle.resolve(locale))
        .size(typography::BODY)
        .color(palette::GRAY_700);

    let mut links = Row::new().spacing(spacing::MD);
    for link in project.links {
        let label = match link.label {
            LinkLabel::Demo => labels.demo,
            LinkLabel::Repository => labels.repository,
        };
        links = links.push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(format!("{label}:"))
                        .size(typography::BODY)
                        .color(palette::PRIMARY_600),
                )
                .push(Text::new(link.url).size(typography::BODY)),
        );
    }

    let mut technologies = Row::new().spacing(spacing::XS);
    for technology in project.technologies {
        technologies = technologies.push(tag(technology));
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(subtitle)
        .push(links)
        .push(labeled_paragraph(
            labels.description,
            project.description.resolve(locale),
        ));

    if !project.mentoring.is_empty() {
        column = column.push(localized_list(labels.mentoring, project.mentoring, locale));
    }

    column = column
        .push(labeled_block(labels.technologies, technologies.into()))
        .push(localized_list(labels.features, project.features, locale))
        .push(localized_list(labels.stack, project.tech_stack, locale))
        .push(localized_list(
            labels.architecture,
            project.architecture,
            locale,
        ))
        .push(localized_list(
            labels.challenges,
            project.technical_challenges,
            locale,
        ))
        .push(localized_list(labels.ux, project.ux_highlights, locale));

    card(column.into())
}

/// A subsection heading followed by a single paragraph.
fn labeled_paragraph<'a, M: 'a>(label: &'a str, body: &'a str) -> Element<'a, M> {
    labeled_block(
        label,
        Text::new(body)
            .size(typography::BODY)
            .color(palette::GRAY_700)
            .into(),
    )
}

/// A subsection heading followed by resolved bullet items.
fn localized_list<'a, M: 'a>(
    label: &'a str,
    items: &'a [LocalizedText],
    locale: Locale,
) -> Element<'a, M> {
    let mut list = Column::new().spacing(spacing::XXS);
    for item in items {
        list = list.push(bullet('▸', item.resolve(locale)));
    }
    labeled_block(label, list.into())
}

fn labeled_block<'a, M: 'a>(label: &'a str, content: Element<'a, M>) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::TITLE_SM)
                .color(palette::GRAY_900),
        )
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary_for;

    #[test]
    fn portfolio_view_renders_for_both_locales() {
        for locale in Locale::ALL {
            let ctx = ViewContext {
                t: dictionary_for(locale),
                locale,
            };
            let _element: Element<'_, ()> = view(ctx);
        }
    }

    #[test]
    fn link_labels_resolve_through_the_dictionary() {
        let labels = &dictionary_for(Locale::En).portfolio;
        assert_eq!(labels.demo, "Open demo");
        assert_eq!(labels.repository, "Open repository");
    }
}
