// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use exif_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_image = Some(PathBuf::from("paysage.jpg"));
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use defaults::{
    DEFAULT_COORDINATE_PRECISION, DEFAULT_SHOW_UNREADABLE_TAGS, MAX_COORDINATE_PRECISION,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ExifLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Image opened when none is given on the command line.
    #[serde(default)]
    pub default_image: Option<PathBuf>,
    #[serde(default)]
    pub show_unreadable_tags: Option<bool>,
    #[serde(default)]
    pub coordinate_precision: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_image: None,
            show_unreadable_tags: Some(DEFAULT_SHOW_UNREADABLE_TAGS),
            coordinate_precision: Some(DEFAULT_COORDINATE_PRECISION),
        }
    }
}

impl Config {
    /// Effective coordinate precision, capped at [`MAX_COORDINATE_PRECISION`].
    #[must_use]
    pub fn coordinate_precision(&self) -> usize {
        self.coordinate_precision
            .unwrap_or(DEFAULT_COORDINATE_PRECISION)
            .min(MAX_COORDINATE_PRECISION)
    }

    /// Whether tag listings include unreadable tags.
    #[must_use]
    pub fn show_unreadable_tags(&self) -> bool {
        self.show_unreadable_tags
            .unwrap_or(DEFAULT_SHOW_UNREADABLE_TAGS)
    }
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

/// Loads a configuration file, falling back to defaults on invalid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
