use super::types::ModelId;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not find {0} directory")]
    NoConfigDir(&'static str),

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("request_timeout_secs must be at least 1")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL the `/chat` path is resolved against.
    pub backend_url: String,
    pub default_model: ModelId,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            default_model: ModelId::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf, SettingsError> {
        let config_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            // Windows: %APPDATA%\ppl-chat, macOS: ~/Library/Application Support/ppl-chat
            dirs::config_dir()
                .ok_or(SettingsError::NoConfigDir("config"))?
                .join("ppl-chat")
        } else {
            // Linux/Unix: $HOME/.ppl-chat
            dirs::home_dir()
                .ok_or(SettingsError::NoConfigDir("home"))?
                .join(".ppl-chat")
        };

        Ok(config_dir)
    }

    pub fn settings_path() -> Result<PathBuf, SettingsError> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file, or defaults when there is none.
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::settings_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(contents)?;

        // A zero timeout would fail every request before it is sent.
        if settings.request_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout);
        }

        Ok(settings)
    }
}
