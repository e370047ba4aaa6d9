use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    /// Default upper bound for `analyze` and `daemon` projections
    #[serde(default = "default_projection_limit")]
    pub projection_limit: u64,
    #[serde(default = "default_persona_table_size")]
    pub persona_table_size: u64,
    /// How many multiples to print before eliding the rest
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
    /// Largest index whose partitions are enumerated in full
    #[serde(default = "default_enumeration_limit")]
    pub enumeration_limit: u64,
    #[serde(default)]
    pub sequence_format: SequenceFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SequenceFormat {
    Simple,
    #[default]
    Table,
    Json,
}

fn default_color() -> bool {
    true
}

fn default_projection_limit() -> u64 {
    100
}

fn default_persona_table_size() -> u64 {
    10
}

fn default_preview_len() -> usize {
    20
}

fn default_enumeration_limit() -> u64 {
    60
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            projection_limit: default_projection_limit(),
            persona_table_size: default_persona_table_size(),
            preview_len: default_preview_len(),
            enumeration_limit: default_enumeration_limit(),
            sequence_format: SequenceFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    /// Load from `config_path`, falling back to defaults when the file is absent.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;
        let config = Self::from_toml(&content)?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.projection_limit == 0 {
            return Err(AppError::Config("projection_limit must be >= 1".to_string()));
        }
        if self.general.persona_table_size == 0 {
            return Err(AppError::Config("persona_table_size must be >= 1".to_string()));
        }
        if self.general.preview_len == 0 {
            return Err(AppError::Config("preview_len must be >= 1".to_string()));
        }
        if self.general.enumeration_limit == 0 {
            return Err(AppError::Config("enumeration_limit must be >= 1".to_string()));
        }
        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = self.to_toml()?;
        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> AppResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("e9")
            .join("config.toml")
    }
}
