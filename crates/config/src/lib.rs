//! Configuration management for the advisory pipeline
//!
//! Supports loading configuration from:
//! - YAML/TOML/JSON files under `config/`
//! - Environment variables (`KRISHI_MITRA__` prefix)
//!
//! Advisory thresholds and defaults are compile-time constants in
//! [`constants`]; they are part of the rule set, not deployment settings.

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, KnowledgeConfig, ObservabilityConfig, RuntimeEnvironment,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
