//! Configuration for decoding defaults
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (kenall.toml)
//! - Environment variables (KENALL__*)
//!
//! ## Example config file (kenall.toml):
//! ```toml
//! [decode]
//! pinned_version = "2025-01-01"
//! mode = "strict"
//!
//! [output]
//! format = "compact"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::factory::DecodeMode;
use crate::version::SchemaVersion;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Decoding defaults
    #[serde(default)]
    pub decode: DecodeConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Decoding defaults applied when the caller gives none
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Version token used when none is passed explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_version: Option<String>,

    #[serde(default)]
    pub mode: DecodeMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl ModelsConfig {
    /// Load configuration from default locations
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, adding a required file at `config_path`
    pub fn load_from(config_path: Option<&str>) -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["kenall.toml", ".kenall.toml", "config/kenall.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("jp", "kenall", "kenall") {
            let xdg_config = config_dir.config_dir().join("kenall.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // KENALL__DECODE__PINNED_VERSION=2025-01-01
        builder = builder.add_source(
            Environment::with_prefix("KENALL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// The configured version, parsed
    pub fn pinned_version(&self) -> Result<Option<SchemaVersion>> {
        self.decode
            .pinned_version
            .as_deref()
            .map(SchemaVersion::parse)
            .transpose()
    }

    /// Explicit version if given, else the configured one
    pub fn effective_version(
        &self,
        explicit: Option<SchemaVersion>,
    ) -> Result<Option<SchemaVersion>> {
        match explicit {
            Some(version) => Ok(Some(version)),
            None => self.pinned_version(),
        }
    }

    /// Reject malformed tokens and strict mode without a version
    pub fn validate(&self) -> Result<()> {
        let version = self.pinned_version()?;
        if self.decode.mode == DecodeMode::Strict && version.is_none() {
            return Err(ModelError::VersionRequired);
        }
        Ok(())
    }

    /// Serialize `value` in the configured output format
    pub fn format_json(&self, value: &Value) -> Result<String> {
        let text = match self.output.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Compact => serde_json::to_string(value)?,
        };
        Ok(text)
    }
}
