//! Configuration types and loading.
//!
//! A single optional YAML file. Discovery order: `TASKFLOW_CONFIG_PATH`,
//! then `~/.taskflow/taskflow.yaml`. Missing file means defaults; CLI flags
//! override individual fields at dispatch time.

use crate::format::OutputFormat;
use crate::types::{DEFAULT_MONTHLY_GOAL, DEFAULT_WEEKLY_GOAL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TASKFLOW_CONFIG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory holding the JSON state files.
    /// Defaults to the platform data dir (e.g. `~/.local/share/taskflow`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Weekly XP goal used when creating fresh progress state.
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,

    /// Monthly XP goal used when creating fresh progress state.
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: u32,

    /// Default output format for list and progress views.
    #[serde(default)]
    pub format: OutputFormat,

    /// Dark-mode default used until the theme preference is first persisted.
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_weekly_goal() -> u32 {
    DEFAULT_WEEKLY_GOAL
}

fn default_monthly_goal() -> u32 {
    DEFAULT_MONTHLY_GOAL
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            weekly_goal: default_weekly_goal(),
            monthly_goal: default_monthly_goal(),
            format: OutputFormat::default(),
            dark_mode: false,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let Some(home) = dirs::home_dir() else {
            return Ok(Self::default());
        };
        let path = home.join(".taskflow").join("taskflow.yaml");
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}
