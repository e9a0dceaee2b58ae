// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the locale state container and translates UI
//! events into state transitions and side effects (locale persistence,
//! scroll-to-section navigation). This file keeps policy decisions
//! (window sizing, locale restoration order) close to the entry point so
//! user-facing behavior is easy to audit.

mod message;
mod section;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::i18n::LocaleState;
use iced::{window, Task, Theme};

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    locale_state: LocaleState,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Restores the persisted locale (honoring a CLI override) and builds
    /// the initial state. First render already uses the restored locale.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let locale_state = match flags.config_path() {
            Some(path) => LocaleState::restore_from_path(&path, flags.lang.as_deref()),
            None => LocaleState::restore(flags.lang.as_deref()),
        };
        (Self { locale_state }, Task::none())
    }

    pub fn locale_state(&self) -> &LocaleState {
        &self.locale_state
    }

    fn title(&self) -> String {
        format!("Luedan — {}", self.locale_state.dictionary().hero.role)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
