//! Configuration file support for text-reader.
//!
//! Provides YAML-based configuration through `text-reader.config.yml` files,
//! including data structures, file loading, validation, and resolution
//! against command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::adapters::outbound::filesystem::MAX_FILE_SIZE;
use crate::adapters::outbound::logging::{LogSettings, DEFAULT_COMPONENT, LOG_LEVELS};
use crate::application::dto::OutputFormat;
use crate::reading::domain::ReadErrorPolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "text-reader.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub max_file_size: Option<u64>,
    pub on_read_error: Option<String>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
    pub component: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// One warning line per unknown field, in key order.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to unit, not a map.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        OutputFormat::from_str(format)
            .map_err(|e| anyhow::anyhow!("Invalid config: format\n{}", e))?;
    }

    if let Some(ref policy) = config.on_read_error {
        ReadErrorPolicy::from_str(policy)
            .map_err(|e| anyhow::anyhow!("Invalid config: on_read_error\n{}", e))?;
    }

    if config.max_file_size == Some(0) {
        bail!(
            "Invalid config: max_file_size must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default of {} bytes.",
            MAX_FILE_SIZE
        );
    }

    if let Some(ref level) = config.log_level {
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "Invalid config: log_level '{}' is not recognized.\n\n💡 Hint: Use one of: {}",
                level,
                LOG_LEVELS.join(", ")
            );
        }
    }

    if let Some(ref component) = config.component {
        if component.trim().is_empty() {
            bail!(
                "Invalid config: component must not be empty.\n\n\
                 💡 Hint: Omit the field to use '{}'.",
                DEFAULT_COMPONENT
            );
        }
    }

    Ok(())
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub max_file_size: Option<u64>,
    pub absent_on_error: bool,
    pub log_level: Option<String>,
    pub log_json: bool,
}

/// Effective settings after merging CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub max_file_size: u64,
    pub policy: ReadErrorPolicy,
    pub log: LogSettings,
    pub component: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            max_file_size: MAX_FILE_SIZE,
            policy: ReadErrorPolicy::default(),
            log: LogSettings::default(),
            component: DEFAULT_COMPONENT.to_string(),
        }
    }
}

impl Settings {
    /// Merges a (validated) config file with command-line overrides.
    pub fn resolve(config: Option<&ConfigFile>, overrides: &Overrides) -> Result<Self> {
        let defaults = Settings::default();
        let empty = ConfigFile::default();
        let config = config.unwrap_or(&empty);

        let format = match (overrides.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format).map_err(anyhow::Error::msg)?,
            (None, None) => defaults.format,
        };

        let policy = if overrides.absent_on_error {
            ReadErrorPolicy::Absent
        } else {
            match config.on_read_error.as_deref() {
                Some(policy) => ReadErrorPolicy::from_str(policy).map_err(anyhow::Error::msg)?,
                None => defaults.policy,
            }
        };

        let max_file_size = overrides
            .max_file_size
            .or(config.max_file_size)
            .unwrap_or(defaults.max_file_size);
        if max_file_size == 0 {
            bail!("--max-file-size must be greater than 0");
        }

        let log = LogSettings {
            level: overrides
                .log_level
                .clone()
                .or_else(|| config.log_level.clone())
                .unwrap_or(defaults.log.level),
            json: overrides.log_json || config.log_json.unwrap_or(defaults.log.json),
        };

        let component = config.component.clone().unwrap_or(defaults.component);

        Ok(Self {
            format,
            max_file_size,
            policy,
            log,
            component,
        })
    }
}
