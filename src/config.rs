// Configuration loading and parsing (mvp-analyzer.toml).
//
// The config file is optional: lookup order is the current directory, then
// the platform config directory. A missing file means defaults throughout.

use crate::pipeline::SortKey;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "mvp-analyzer.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Assembled, validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Default input CSV path, used when the CLI gives none.
    pub input: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How many rows of the current view to print.
    pub top: usize,
    /// Default sort key (any spelling `SortKey::from_str` accepts).
    pub sort_by: String,
    pub ascending: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            input: "mvp_candidates.csv".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            top: 10,
            sort_by: SortKey::MvpScore.as_str().to_string(),
            ascending: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// The configured sort key. Always valid after `validate`.
    pub fn sort_key(&self) -> SortKey {
        self.display.sort_by.parse().unwrap_or_default()
    }
}

/// Raw deserialization target for the whole file; both tables optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    data: DataConfig,
    #[serde(default)]
    display: DisplayConfig,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from an explicit file path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = Config {
        data: file.data,
        display: file.display,
    };
    validate(&config)?;
    Ok(config)
}

/// Locate and load the config file, falling back to defaults when no file
/// exists. Lookup order: `./mvp-analyzer.toml`, then the platform config
/// directory (e.g. `~/.config/mvp-analyzer/` on Linux).
pub fn load_config() -> Result<Config, ConfigError> {
    if let Some(path) = find_config_file() {
        return load_config_from(&path);
    }
    Ok(Config::default())
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let dirs = ProjectDirs::from("", "", "mvp-analyzer")?;
    let candidate = dirs.config_dir().join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.top == 0 {
        return Err(ConfigError::ValidationError {
            field: "display.top".into(),
            message: "must be greater than 0".into(),
        });
    }

    if let Err(message) = config.display.sort_by.parse::<SortKey>() {
        return Err(ConfigError::ValidationError {
            field: "display.sort_by".into(),
            message,
        });
    }

    if config.data.input.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.input".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
