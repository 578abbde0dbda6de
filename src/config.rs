//! Configuration management.
//!
//! Loads shell defaults from a TOML file: the session identity shown in
//! the prompt, whether submitted lines are echoed, and an optional message
//! of the day. A missing file simply means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConchError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Session defaults (user, device, cwd, echo).
    #[serde(default)]
    pub session: SessionConfig,

    /// Message of the day, printed once at startup.
    #[serde(default)]
    pub motd: Option<String>,
}

/// Session defaults used to seed [`SessionState`].
///
/// [`SessionState`]: crate::session::SessionState
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial user name.
    #[serde(default = "default_user")]
    pub user: String,

    /// Device name shown in the prompt.
    #[serde(default = "default_device")]
    pub device: String,

    /// Initial working directory shown in the prompt.
    #[serde(default = "default_cwd")]
    pub cwd: String,

    /// Whether submitted lines are echoed back with the prompt.
    #[serde(default = "default_echo")]
    pub echo: bool,
}

fn default_user() -> String {
    "user".to_string()
}

fn default_device() -> String {
    "conch".to_string()
}

fn default_cwd() -> String {
    "~".to_string()
}

fn default_echo() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            device: default_device(),
            cwd: default_cwd(),
            echo: default_echo(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("conch")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConchError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ConchError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
