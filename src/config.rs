//! User configuration stored in `config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "music-recommender";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV files merged into the table, in load order.
    #[serde(default)]
    pub datasets: Vec<PathBuf>,
    #[serde(default)]
    pub window: WindowConfig,
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

pub const MIN_WIDTH: f32 = 800.0;
pub const MIN_HEIGHT: f32 = 600.0;

fn default_width() -> f32 {
    MIN_WIDTH
}

fn default_height() -> f32 {
    MIN_HEIGHT
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// `<config_dir>/music-recommender/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

impl Config {
    /// Parse a config file and resolve its dataset paths.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.datasets = config
            .datasets
            .iter()
            .map(|p| resolve_dataset_path(p, base))
            .collect();
        Ok(config)
    }

    /// Write this config, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, text).map_err(write_err)
    }

    /// Load the config at `path`, falling back to defaults.
    ///
    /// A missing file is created with default contents so the user has
    /// something to edit. A broken file is left alone.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            let config = Config::default();
            match config.write_to(path) {
                Ok(()) => log::info!("Wrote default config to {}", path.display()),
                Err(e) => log::warn!("Could not write default config: {e}"),
            }
            return config;
        }
        match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}. Using defaults.");
                Config::default()
            }
        }
    }
}

/// Expand a leading `~` and anchor relative paths at `base`.
fn resolve_dataset_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };
    if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    }
}
