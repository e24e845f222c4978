//! Shell configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::STORAGE_KEY;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "NAVSTATE_CONFIG";

/// Settings for the headless shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Custom data directory for the session database
    pub data_directory: Option<PathBuf>,
    /// Session storage key for the navigation snapshot
    pub storage_key: String,
    /// Keep session storage in memory only
    pub in_memory: bool,
    /// Keep entries left by the previous session
    pub resume_session: bool,
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_directory: None,
            storage_key: STORAGE_KEY.to_string(),
            in_memory: false,
            resume_session: false,
            debug_logging: false,
        }
    }
}

impl ShellConfig {
    /// Load from `NAVSTATE_CONFIG` (if set) and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate();
        Ok(config)
    }

    /// Read a JSON config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read config file {:?}", path))?;
        let config: Self =
            serde_json::from_str(&json).context(format!("Invalid config file {:?}", path))?;
        Ok(config)
    }

    /// Apply `NAVSTATE_*` overrides using `lookup` to read variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup("NAVSTATE_DATA_DIR") {
            self.data_directory = Some(PathBuf::from(dir));
        }
        if let Some(key) = lookup("NAVSTATE_STORAGE_KEY") {
            self.storage_key = key;
        }
        if let Some(value) = lookup("NAVSTATE_IN_MEMORY") {
            self.in_memory = parse_flag("NAVSTATE_IN_MEMORY", &value)?;
        }
        if let Some(value) = lookup("NAVSTATE_RESUME") {
            self.resume_session = parse_flag("NAVSTATE_RESUME", &value)?;
        }
        if let Some(value) = lookup("NAVSTATE_DEBUG") {
            self.debug_logging = parse_flag("NAVSTATE_DEBUG", &value)?;
        }
        Ok(())
    }

    /// Fix any invalid values
    pub fn validate(&mut self) {
        let key = self.storage_key.trim();
        if key.is_empty() {
            self.storage_key = STORAGE_KEY.to_string();
        } else if key.len() != self.storage_key.len() {
            self.storage_key = key.to_string();
        }
    }

    /// Get the data directory, using default if not set
    pub fn get_data_directory(&self) -> PathBuf {
        self.data_directory.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("navstate")
        })
    }

    /// Session database file
    pub fn database_path(&self) -> PathBuf {
        self.get_data_directory().join("session.db")
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.debug_logging {
            "navstate=debug"
        } else {
            "navstate=info"
        }
    }
}

/// Parse a boolean flag value
pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("Invalid value '{}' for {}", other, name),
    }
}
