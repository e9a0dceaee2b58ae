// SPDX-License-Identifier: MPL-2.0
//! `cvfolio` is a bilingual single-page portfolio viewer built with the
//! Iced GUI framework.
//!
//! All user-facing text lives in two parallel, structurally-typed
//! dictionaries (Spanish and English); the active language is held by a
//! single locale state container and persisted across sessions. Portfolio
//! project records carry their free text as per-language pairs resolved at
//! render time.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
