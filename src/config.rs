//! Configuration management for job-tailor

use crate::error::{JobTailorError, Result};
use crate::resume::TailorOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub tailor: TailorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Default job dataset, used when the CLI gets no --data flag.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailorConfig {
    pub max_highlights: usize,
    pub fuzzy_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                path: PathBuf::from("data/jobs.json"),
            },
            tailor: TailorConfig {
                max_highlights: 3,
                fuzzy_threshold: 0.95,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color: true,
            },
        }
    }
}

impl Config {
    /// Load the config file if one exists, otherwise fall back to defaults
    /// without writing anything.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                JobTailorError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobTailorError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-tailor")
            .join("config.toml")
    }

    pub fn tailor_options(&self) -> TailorOptions {
        TailorOptions {
            max_highlights: self.tailor.max_highlights,
            fuzzy_threshold: self.tailor.fuzzy_threshold,
        }
    }
}
