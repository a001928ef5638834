//! Configuration loader
//!
//! Loads configuration from defaults, a TOML file and environment variables
//! using Figment.

use super::FileConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    VALID_LOG_LEVELS,
};
use crate::scanner::AntiPatternScanner;
use crate::{Result, ValidationError};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Look for `storedesk.toml` in default locations when no path is set
    search_defaults: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            search_defaults: true,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip the default file locations (working dir, user config dir)
    pub fn without_default_search(mut self) -> Self {
        self.search_defaults = false;
        self
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `FileConfig::default()`
    /// 2. TOML configuration file (explicit path, else a default location)
    /// 3. Environment variables with prefix (e.g. `STOREDESK_OUTPUT__FORMAT`)
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<FileConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                warn!("Configuration file not found: {}", config_path.display());
                return Err(ValidationError::Config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            info!("Configuration loaded from {}", config_path.display());
        } else if self.search_defaults {
            if let Some(default_path) = Self::find_default_config_path() {
                figment = figment.merge(Toml::file(&default_path));
                info!("Configuration loaded from {}", default_path.display());
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: FileConfig = figment.extract()?;
        validate_file_config(&config)?;
        Ok(config)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate configuration values
pub fn validate_file_config(config: &FileConfig) -> Result<()> {
    let level = config.logging.level.to_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        return Err(ValidationError::Config(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            config.logging.level
        )));
    }

    AntiPatternScanner::without(&config.validator.disabled_anti_patterns)?;

    Ok(())
}
