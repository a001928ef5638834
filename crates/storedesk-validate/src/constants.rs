//! Shared constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "STOREDESK";

/// Separator between nested keys in environment variable names
/// (e.g. `STOREDESK_VALIDATOR__SUGGESTIONS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file name looked up when no path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "storedesk.toml";

/// Directory name under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "storedesk";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "STOREDESK_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];
