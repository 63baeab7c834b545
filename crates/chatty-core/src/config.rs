use crate::api::stream::DEFAULT_LINE_CAPACITY;
use crate::options::{ChatOptions, DEFAULT_MODEL};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const HOME_ENV: &str = "CHATTY_HOME";

// ============================================================================
// Default Functions
// ============================================================================

fn default_stream() -> bool {
    false
}

fn default_line_capacity() -> usize {
    DEFAULT_LINE_CAPACITY
}

// ============================================================================
// Config
// ============================================================================

/// Global config from `~/.chatty/config.toml`.
/// All fields are optional with sensible defaults; config.toml itself is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Model used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Base URL used when `OPENAI_API_BASE` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature (0.0 to 2.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling parameter (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Stream responses by default (equivalent to -s)
    #[serde(default = "default_stream")]
    pub stream: bool,
    /// Upper bound for a single event-stream line, in bytes
    #[serde(default = "default_line_capacity")]
    pub line_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: None,
            base_url: None,
            temperature: None,
            top_p: None,
            stream: default_stream(),
            line_capacity: default_line_capacity(),
        }
    }
}

impl Config {
    /// Resolve the chatty directory.
    ///
    /// Precedence:
    /// 1. `home_override` parameter
    /// 2. `CHATTY_HOME` environment variable
    /// 3. `~/.chatty` default
    pub fn home(home_override: Option<PathBuf>) -> io::Result<PathBuf> {
        if let Some(path) = home_override {
            return Ok(path);
        }
        if let Ok(chatty_home) = std::env::var(HOME_ENV) {
            return Ok(PathBuf::from(chatty_home));
        }
        let home = home_dir()
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Home directory not found"))?;
        Ok(home.join(".chatty"))
    }

    /// Load config.toml from the chatty directory, falling back to defaults
    /// when the file does not exist.
    pub fn load(home_override: Option<PathBuf>) -> io::Result<Self> {
        let dir = Self::home(home_override)?;
        Self::load_from(&dir.join(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> io::Result<Self> {
        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("Failed to parse config: {}", e),
            )
        })?;

        if config.line_capacity < 2 {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "line_capacity must be at least 2, got {}",
                    config.line_capacity
                ),
            ));
        }

        Ok(config)
    }

    /// Build request options, letting explicit values win over config.
    pub fn chat_options(
        &self,
        model: Option<String>,
        temperature: Option<f64>,
        top_p: Option<f64>,
    ) -> ChatOptions {
        ChatOptions {
            model: model
                .or_else(|| self.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: temperature.or(self.temperature),
            top_p: top_p.or(self.top_p),
        }
    }
}
