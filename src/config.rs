//! Configuration loading and management for freqsum.
//!
//! Loads settings from `freqsum.toml` with an environment variable override for
//! the API key. A missing config file means defaults.

use crate::summarizer::DEFAULT_SENTENCES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `[api] api_key`
pub const API_KEY_ENV: &str = "FREQSUM_API_KEY";

const CONFIG_FILE: &str = "freqsum.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Summarizer defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Sentence count used when a request does not specify one
    pub default_sentences: i64,
}

/// Extra stop-words merged into the built-in English set
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StopWordsConfig {
    pub extra: Vec<String>,
}

/// Request layer settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Shared secret. Unset or empty accepts every request.
    pub api_key: Option<String>,
    /// Text summarized when a request omits `text`
    pub default_text: Option<String>,
}

/// Web page fetching
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub summarizer: SummarizerConfig,
    pub stop_words: StopWordsConfig,
    pub api: ApiConfig,
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration from the default location (freqsum.toml in cwd or home)
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load configuration from a specific path, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api.api_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("freqsum")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.summarizer.default_sentences < 1 {
            return Err(ConfigError::InvalidValue(format!(
                "summarizer.default_sentences must be at least 1, got {}",
                self.summarizer.default_sentences
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "fetch.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured API key, if one is set and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            default_sentences: DEFAULT_SENTENCES,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}
