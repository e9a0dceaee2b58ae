// SPDX-License-Identifier: MPL-2.0
//! View composition for the single page.
//!
//! Every section receives the active dictionary (and locale where bilingual
//! content is resolved) through its `ViewContext`, so a re-render after a
//! locale switch updates all sections from the same matched pair.

use super::{App, Message};
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::experience::{self, ViewContext as ExperienceViewContext};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::portfolio::{self, ViewContext as PortfolioViewContext};
use crate::ui::skills::{self, ViewContext as SkillsViewContext};
use iced::{
    widget::{container, scrollable, Column, Container, Id},
    Element, Length, Theme,
};

/// Identifier of the page scrollable, shared with the update loop for
/// scroll-to-section tasks.
pub const PAGE_SCROLLABLE_ID: &str = "portfolio-page-scrollable";

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let t = self.locale_state.dictionary();
        let locale = self.locale_state.locale();

        let header = header::view(HeaderViewContext { t, locale }).map(Message::Header);
        let hero = hero::view(HeroViewContext { t }).map(Message::Hero);

        let sections = Column::new()
            .spacing(spacing::LG)
            .push(hero)
            .push(about::view(AboutViewContext { t }))
            .push(skills::view(SkillsViewContext { t }))
            .push(experience::view(ExperienceViewContext { t }))
            .push(portfolio::view(PortfolioViewContext { t, locale }))
            .push(contact::view(ContactViewContext { t }))
            .push(footer::view(FooterViewContext { t }));

        let page = scrollable(sections)
            .id(Id::new(PAGE_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill);

        let layout = Column::new().push(header).push(page);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::SURFACE.into()),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_with_default_state() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn view_renders_in_english_too() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let flags = crate::app::Flags {
            lang: Some("en".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };
        let (app, _task) = App::new(flags);
        let _element = app.view();
    }
}
