//! Configuration file support for Biblio.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/biblio/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub loans: LoanConfig,
}

/// Loan period, per-user limit and late fine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoanConfig {
    #[serde(default = "default_period_days")]
    pub period_days: u32,

    #[serde(default = "default_max_per_user")]
    pub max_per_user: usize,

    #[serde(default = "default_fine_per_day")]
    pub fine_per_day: u64,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            max_per_user: default_max_per_user(),
            fine_per_day: default_fine_per_day(),
        }
    }
}

// Default value functions
fn default_period_days() -> u32 {
    7
}

fn default_max_per_user() -> usize {
    3
}

fn default_fine_per_day() -> u64 {
    500
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("biblio").join("config.toml"))
    }

    /// Reject settings under which no loan could ever be made
    pub fn validate(&self) -> Result<()> {
        if self.loans.period_days == 0 {
            return Err(Error::Config("loans.period_days must be at least 1".into()));
        }
        if self.loans.max_per_user == 0 {
            return Err(Error::Config("loans.max_per_user must be at least 1".into()));
        }
        Ok(())
    }
}
