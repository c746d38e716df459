//! Client configuration management.
//!
//! Handles loading and saving the client configuration: the backend base
//! URL and the last used account email.
//!
//! Configuration is stored at `~/.config/crewdesk/config.json`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Application name used for the config directory path
const APP_NAME: &str = "crewdesk";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Base URL used when neither the environment nor the config file sets one
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ApiError> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|err| ApiError::Config(format!("failed to read config: {}", err)))?;
            serde_json::from_str(&contents)
                .map_err(|err| ApiError::Config(format!("failed to parse config: {}", err)))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<(), ApiError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ApiError::Config(format!("failed to create config dir: {}", err)))?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|err| ApiError::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, contents)
            .map_err(|err| ApiError::Config(format!("failed to write config: {}", err)))
    }

    /// Resolve the backend base URL: config value, falling back to the
    /// default. Callers may layer an environment override on top.
    pub fn base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    fn config_path() -> Result<PathBuf, ApiError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ApiError::Config("could not find config directory".to_string()))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
