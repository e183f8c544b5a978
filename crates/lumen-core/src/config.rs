//! Application configuration.
//!
//! The host page may embed a JSON block with settings for the bootstrap:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "mount_target_id": "app", "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field is optional; missing fields take their defaults. The
//! bootstrap falls back to [`AppConfig::default`] when the block is invalid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug};

use crate::error::{Error, Result};

/// Id of the element holding the embedded JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Default id of the element the application mounts into.
pub const DEFAULT_MOUNT_TARGET_ID: &str = "app";

/// Default maximum log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Id of the element the page is mounted into.
    #[serde(default = "default_mount_target_id")]
    pub mount_target_id: String,
    /// Maximum log level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether log lines include the emitting module.
    #[serde(default)]
    pub log_target: bool,
}

fn default_mount_target_id() -> String {
    DEFAULT_MOUNT_TARGET_ID.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_target_id: default_mount_target_id(),
            log_level: default_log_level(),
            log_target: false,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is invalid.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the embedded configuration block, if any.
    ///
    /// Absent or blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-blank block is malformed or invalid.
    pub fn from_embedded(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => {
                debug!("No embedded config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.mount_target_id.trim().is_empty() {
            return Err(Error::Configuration(
                "mount_target_id must not be empty".to_string(),
            ));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `log_level` is not a level name.
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level).map_err(|_| {
            Error::Configuration(format!("unknown log level '{}'", self.log_level))
        })
    }
}
