use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::languages::LanguageTable;
use crate::fs::atomic_write;
use crate::paths;

/// Errors raised while loading, validating or saving the config document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Config file is not valid JSON: {}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Baidu credentials are incomplete: both appid and appkey must be set")]
    Incomplete,

    #[error("Language table must contain at least one entry")]
    EmptyLanguageTable,

    #[error("Failed to access config file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize config")]
    Serialize(#[from] serde_json::Error),
}

/// Baidu API credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    /// Builds credentials, rejecting blank values.
    ///
    /// Values are kept exactly as given since both go into the signature.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let app_key = app_key.into();

        if app_id.trim().is_empty() || app_key.trim().is_empty() {
            return Err(ConfigError::Incomplete);
        }

        Ok(Self { app_id, app_key })
    }
}

// The key never shows up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"***")
            .finish()
    }
}

/// The on-disk configuration document.
///
/// Corresponds to `~/baidu.txt`:
///
/// ```json
/// {"appid": "...", "appkey": "...", "language": {"English": "en"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub appkey: String,
    #[serde(default)]
    pub language: LanguageTable,
}

impl ConfigFile {
    /// Returns the credentials if both values are present.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        Credentials::new(self.appid.as_str(), self.appkey.as_str())
    }
}

/// Manages loading and saving the configuration document.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `<home>/baidu.txt`.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            config_path: paths::config_path()?,
        })
    }

    /// Creates a manager for an explicit path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: self.config_path.clone(),
                });
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Invalid {
            path: self.config_path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(config)?;

        atomic_write(&self.config_path, &contents).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })
    }
}
