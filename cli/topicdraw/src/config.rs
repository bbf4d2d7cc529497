//! Configuration.
//!
//! Handles:
//! - Round colour spacing
//! - Colour on/off
//! - Default roster file
//!
//! Values come from `config.json` in the user config directory (if present)
//! and are then overridden by environment variables. The file is never
//! written by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use topicdraw_engine::HUE_STEP;
use tracing::debug;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "topicdraw", "tdraw").map(|dirs| dirs.config_dir().to_path_buf())
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hue distance between rounds, in degrees.
    #[serde(default = "default_hue_step")]
    pub hue_step: u16,

    /// Colour participant names by round.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Roster file used when `--roster` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_roster: Option<PathBuf>,
}

fn default_hue_step() -> u16 {
    HUE_STEP
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hue_step: default_hue_step(),
            color: default_color(),
            default_roster: None,
        }
    }
}

impl Config {
    /// Load config from disk (or defaults) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let config = match config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            Some(path) if path.exists() => Self::from_path(&path)?,
            _ => Self::default(),
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Apply `TDRAW_HUE_STEP` and `NO_COLOR` from `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(step) = lookup("TDRAW_HUE_STEP").and_then(|v| v.trim().parse().ok()) {
            self.hue_step = step;
        }

        // https://no-color.org: any non-empty value disables colour.
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }

        self
    }
}
