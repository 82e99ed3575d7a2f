//! Error types for rule configuration
//!
//! Segmentation itself never fails. Only building a rule set from external
//! configuration can.

use std::path::PathBuf;
use thiserror::Error;

/// Rule configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Rule file could not be read
    #[error("failed to read rule file {path}: {source}")]
    Io {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid TOML for the rule schema
    #[error("failed to parse rule configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rule set could not be rendered as TOML
    #[error("failed to render rule configuration: {0}")]
    Render(#[from] toml::ser::Error),

    /// Values parse but are inconsistent
    #[error("invalid rule configuration: {0}")]
    Invalid(String),
}

/// Result type for rule configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
