//! Optional user config seeding the wizard's initial answers.
//!
//! Lives at `~/.config/readmate/config.toml` (platform equivalent via
//! `dirs`). Every field is optional; a missing file means plain defaults.
//!
//! ```toml
//! author_name = "Ada Lovelace"
//! github_username = "ada"
//! license = "MIT License"
//! style = "classic"
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::record::{AnswerRecord, License, TemplateStyle};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub author_name: Option<String>,
    pub github_username: Option<String>,
    pub website: Option<String>,
    pub license: Option<License>,
    pub style: Option<TemplateStyle>,
}

impl UserConfig {
    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("readmate").join("config.toml"))
    }

    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Seed a record's author fields and license from the config.
    pub fn apply(&self, record: &mut AnswerRecord) {
        if let Some(name) = &self.author_name {
            record.author_name = name.clone();
        }
        if let Some(username) = &self.github_username {
            record.github_username = username.clone();
        }
        if let Some(website) = &self.website {
            record.website = website.clone();
        }
        if let Some(license) = self.license {
            record.license = Some(license);
        }
    }
}
