// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for launch-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. launch-rs.toml (cwd, optional)
//! 3. --config (repeatable)
//! 4. LAUNCH_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! LAUNCH_GLOBAL__LOG_LEVEL=4         → global.log_level = 4
//! LAUNCH_ENVIRONMENT__INHERIT=false  → environment.inherit = false
//! LAUNCH_ARGUMENTS__PREFIX=/opt      → arguments.prefix = "/opt"
//! ```
//!
//! # Default Launch Arguments
//!
//! ```toml
//! [arguments]
//! prefix = "/opt/tool"   # $(var prefix) unless overridden with -a prefix:=...
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub use loader::ConfigLoader;
pub use types::{EnvironmentConfig, GlobalConfig};

/// Local configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "launch-rs.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "LAUNCH";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Initial environment options.
    pub environment: EnvironmentConfig,
    /// Default launch arguments.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<String, String>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use launch_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("launch-rs.toml")
    ///     .with_env_prefix("LAUNCH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an argument name that is empty
    /// or contains whitespace or `:=`.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for name in self.arguments.keys() {
            if name.is_empty() || name.contains(char::is_whitespace) || name.contains(":=") {
                return Err(ConfigError::InvalidValue {
                    section: "arguments".to_string(),
                    key: name.clone(),
                    message: "argument names must be non-empty words".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is ordered by key and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.log_level".to_string(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "global.log_format".to_string(),
            self.global.log_format.to_string(),
        );
        options.insert(
            "environment.inherit".to_string(),
            self.environment.inherit.to_string(),
        );
        for (name, value) in &self.arguments {
            options.insert(format!("arguments.{name}"), value.clone());
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
