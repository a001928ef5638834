//! Configuration Module
//!
//! Provides file-based configuration for storedesk, allowing operators to
//! tune output and the anti-pattern table via `storedesk.toml` and
//! `STOREDESK_*` environment variables.

mod file_config;
mod loader;

pub use file_config::{FileConfig, LoggingConfig, OutputConfig, ValidatorSettings};
pub use loader::ConfigLoader;
