//! Configuration handling for bountyboard
//!
//! Loaded from a TOML file (default `~/.config/bountyboard/config.toml`).
//! A missing file is not an error; every field has a default. Dates are
//! written as quoted strings, e.g. `default_start_date = "2021-04-06"`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BountyError;
use crate::seed::demo_subscription;
use crate::types::Subscription;

/// Bountyboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Board settings
    #[serde(default)]
    pub board: BoardConfig,

    /// Subscription summary shown above the programs table
    #[serde(default = "demo_subscription")]
    pub subscription: Subscription,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            subscription: demo_subscription(),
        }
    }
}

/// Core board settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Default start date for the creation form
    #[serde(default = "default_start_date")]
    pub default_start_date: NaiveDate,

    /// Load the demo programs on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_start_date() -> NaiveDate {
    // The creation form's historical default
    NaiveDate::from_ymd_opt(2021, 4, 6).expect("valid date")
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_start_date: default_start_date(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Config, BountyError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BountyError::Parse {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, BountyError> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            _ => Ok(Config::default()),
        }
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bountyboard").join("config.toml"))
    }
}
