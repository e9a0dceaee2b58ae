// SPDX-License-Identifier: MPL-2.0
//! UI modules for the single-page portfolio.
//!
//! Each section follows the same shape: a `ViewContext` carrying the
//! dictionary (and locale where bilingual content is resolved), a `view`
//! function, and for interactive sections a `Message`/`Event` pair processed
//! by a local `update`. Sections never touch the locale state directly; the
//! application update loop owns all transitions.

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod language_switcher;
pub mod portfolio;
pub mod primitives;
pub mod skills;
