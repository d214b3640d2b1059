// Copyright 2024 Saorsa Labs Limited
//
// This software is dual-licensed under:
// - GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later)
// - Commercial License
//
// For AGPL-3.0 license, see LICENSE-AGPL-3.0
// For commercial licensing, contact: saorsalabs@gmail.com
//
// Unless required by applicable law or agreed to in writing, software
// distributed under these licenses is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.

//! # Configuration Management
//!
//! Layered configuration (environment > file > defaults) for the codec
//! front end. The codec itself takes no configuration; this only decides
//! which dictionary to load, the default `top` flag and the log level.
//!
//! ## Environment variables
//! - `DIP_WORDLIST`: path to a dictionary file
//! - `DIP_TOP`: `true` or `false`
//! - `DIP_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error`

use crate::dictionary::WordDictionary;
use crate::error::{ConfigError, DipError, DipResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dictionary source
    pub dictionary: DictionaryConfig,
    /// Codec defaults
    pub codec: CodecConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Dictionary configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list file; the bundled English list is used when unset
    pub path: Option<PathBuf>,
}

/// Codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Decode into the upper half of the word space by default
    pub top: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing level when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use saorsa_dip::config::Config;
    ///
    /// let config = Config::load()?;
    /// println!("Log level: {}", config.logging.level);
    /// # Ok::<(), saorsa_dip::DipError>(())
    /// ```
    pub fn load() -> DipResult<Self> {
        Self::load_with_path::<&str>(None)
    }

    /// Load configuration with a specific config file path
    pub fn load_with_path<P: AsRef<Path>>(path: Option<P>) -> DipResult<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            config = Self::load_from_file(path)?;
        } else {
            for location in &["dip.toml", "config.toml", "/etc/saorsa-dip/config.toml"] {
                if Path::new(location).exists() {
                    info!("Loading config from: {}", location);
                    config = Self::load_from_file(location)?;
                    break;
                }
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DipResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            DipError::Config(ConfigError::IoError {
                path: path.as_ref().to_string_lossy().to_string().into(),
                source: e,
            })
        })?;

        toml::from_str(&content)
            .map_err(|e| DipError::Config(ConfigError::ParseError(e.to_string().into())))
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> DipResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DipError::Config(ConfigError::ParseError(e.to_string().into())))?;

        fs::write(&path, content).map_err(|e| {
            DipError::Config(ConfigError::IoError {
                path: path.as_ref().to_string_lossy().to_string().into(),
                source: e,
            })
        })?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> DipResult<()> {
        if let Ok(val) = env::var("DIP_WORDLIST") {
            self.dictionary.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = env::var("DIP_TOP") {
            self.codec.top = val.trim().parse().map_err(|_| {
                DipError::Config(ConfigError::InvalidValue {
                    field: "top".into(),
                    reason: format!("expected true or false, got {val:?}").into(),
                })
            })?;
        }
        if let Ok(val) = env::var("DIP_LOG_LEVEL") {
            self.logging.level = val.trim().to_lowercase();
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> DipResult<()> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(format!(
                "logging.level must be one of {}, got {:?}",
                LOG_LEVELS.join("|"),
                self.logging.level
            ));
        }

        if let Some(path) = &self.dictionary.path
            && path.as_os_str().is_empty()
        {
            errors.push("dictionary.path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DipError::Config(ConfigError::ValidationFailed(
                errors.join("; ").into(),
            )))
        }
    }

    /// Build the configured dictionary
    pub fn load_dictionary(&self) -> DipResult<WordDictionary> {
        match &self.dictionary.path {
            Some(path) => WordDictionary::load_from_file(path),
            None => Ok(WordDictionary::english()?),
        }
    }
}
