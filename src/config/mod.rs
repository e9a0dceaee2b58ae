//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The only preference today is the display language. An absent file, an
//! unreadable file, or invalid TOML all degrade to [`Config::default`]; the
//! file is never created until a preference is actually saved.
//!
//! # Examples
//!
//! ```no_run
//! use cvfolio::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("en".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CVFolio";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preferred display language as a two-letter code (`"es"` or `"en"`).
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
