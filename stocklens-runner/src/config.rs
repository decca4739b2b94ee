//! Application configuration stored as TOML.
//!
//! Every field has a default, so a missing file or a partial file is valid.
//! CLI flags override whatever is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "stocklens.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding one `{SYMBOL}.csv` per symbol.
    pub data_dir: PathBuf,
    /// Where exports are written when no explicit path is given.
    pub output_dir: PathBuf,
    pub cache: CacheConfig,
    pub compare: CompareConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/stocks"),
            output_dir: PathBuf::from("results"),
            cache: CacheConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: stocklens_core::data::DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Symbols compared when none are given on the command line.
    pub default_symbols: Vec<String>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            default_symbols: vec!["AAPL".into(), "GOOG".into(), "TSLA".into()],
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            data_dir = "/srv/prices"

            [compare]
            default_symbols = ["MSFT"]
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/prices"));
        assert_eq!(config.compare.default_symbols, vec!["MSFT".to_string()]);
        assert_eq!(config.cache.max_entries, 64);
        assert_eq!(config.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn toml_roundtrip() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml("data_dir = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[cache]\nmax_entries = 8\n").unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().cache.max_entries, 8);
    }
}
