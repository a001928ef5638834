//! Configuration file schema

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::reporter::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root of `storedesk.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub logging: LoggingConfig,
    pub validator: ValidatorSettings,
    pub output: OutputConfig,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    /// Emit log lines as JSON objects
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// `[validator]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    /// Check registry hints and report suggestions for failed field checks
    pub suggestions: bool,
    /// Anti-pattern ids to skip
    pub disabled_anti_patterns: Vec<String>,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            suggestions: true,
            disabled_anti_patterns: Vec::new(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}
