//! User settings for Allotment
//!
//! Manages user preferences: the framework applied when a snapshot does not
//! name one, the currency symbol used in reports and the default output
//! format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::AllotPaths;
use crate::error::AllotError;
use crate::models::FrameworkId;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Terminal,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminal => "terminal",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "text" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// User settings for Allotment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Framework applied when a snapshot does not specify one
    #[serde(default)]
    pub default_framework: FrameworkId,

    /// Output format when none is given on the command line
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Whether reports list child line items under their parents
    #[serde(default = "default_show_children")]
    pub show_children: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_show_children() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_framework: FrameworkId::default(),
            default_format: OutputFormat::default(),
            show_children: default_show_children(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AllotPaths) -> Result<Self, AllotError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AllotError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| AllotError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AllotPaths) -> Result<(), AllotError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AllotError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AllotError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
