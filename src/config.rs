use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::config::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL, EXCHANGE_ENV, LOG_LEVEL_ENV,
};
use crate::error::ConfigError;

/// Switches for rules that differ between historical versions of the rule set
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Apply Bitfinex `HOT -> HYDRO` and `ORS -> ORSGROUP` after the alias table
    #[serde(default = "default_true")]
    pub bitfinex_extra_renames: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            bitfinex_extra_renames: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Exchange used by the CLI when `--exchange` is not given
    #[serde(default)]
    pub default_exchange: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub normalizer: NormalizerOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_exchange: None,
            log_level: default_log_level(),
            normalizer: NormalizerOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load from `$CRYPTO_PAIR_CONFIG` (or `crypto_pair.yaml`), then apply env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(exchange) = env::var(EXCHANGE_ENV) {
            if !exchange.is_empty() {
                self.default_exchange = Some(exchange);
            }
        }
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.is_empty() {
                self.log_level = level;
            }
        }
    }
}
