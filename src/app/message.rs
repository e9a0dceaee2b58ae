// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{header, hero};
use std::path::{Path, PathBuf};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override as a two-letter code (`es` or `en`).
    pub lang: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Used by tests and portable deployments.
    pub config_dir: Option<String>,
}

impl Flags {
    /// Settings file path implied by the `config_dir` override, if any.
    pub(super) fn config_path(&self) -> Option<PathBuf> {
        self.config_dir
            .as_deref()
            .map(|dir| Path::new(dir).join("settings.toml"))
    }
}
