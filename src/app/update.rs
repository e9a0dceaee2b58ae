// SPDX-License-Identifier: MPL-2.0
//! Update loop: translates section events into locale transitions and
//! scroll navigation.

use super::view::PAGE_SCROLLABLE_ID;
use super::{App, Message, Section};
use crate::ui::{header, hero};
use iced::widget::{operation, Id};
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => match header::update(msg) {
                header::Event::LocaleSelected(locale) => {
                    // Single writer entry point: state first, persistence
                    // inside is fire-and-forget.
                    self.locale_state.set_locale(locale);
                    Task::none()
                }
                header::Event::JumpTo(section) => jump_to(section),
            },
            Message::Hero(msg) => match hero::update(msg) {
                hero::Event::JumpTo(section) => jump_to(section),
            },
        }
    }
}

fn jump_to(section: Section) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), section.anchor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{dictionary_for, Locale, DEFAULT_LOCALE};
    use crate::ui::language_switcher;

    fn app_with_temp_config() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let flags = super::super::Flags {
            lang: None,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };
        let (app, _task) = App::new(flags);
        (app, dir)
    }

    #[test]
    fn locale_selection_updates_locale_and_dictionary_together() {
        let (mut app, _dir) = app_with_temp_config();
        assert_eq!(app.locale_state().locale(), DEFAULT_LOCALE);

        let _task = app.update(Message::Header(header::Message::Switcher(
            language_switcher::Message::LocaleSelected(Locale::En),
        )));

        assert_eq!(app.locale_state().locale(), Locale::En);
        assert!(std::ptr::eq(
            app.locale_state().dictionary(),
            dictionary_for(Locale::En)
        ));
    }

    #[test]
    fn locale_selection_persists_across_sessions() {
        let (mut app, dir) = app_with_temp_config();
        let _task = app.update(Message::Header(header::Message::Switcher(
            language_switcher::Message::LocaleSelected(Locale::En),
        )));

        let flags = super::super::Flags {
            lang: None,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };
        let (restored, _task) = App::new(flags);
        assert_eq!(restored.locale_state().locale(), Locale::En);
    }

    #[test]
    fn jump_messages_do_not_touch_locale() {
        let (mut app, _dir) = app_with_temp_config();
        let _task = app.update(Message::Hero(hero::Message::ViewSkills));
        assert_eq!(app.locale_state().locale(), DEFAULT_LOCALE);
    }
}
