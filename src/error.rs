//! Error types for loading and validating configuration.
//!
//! Lookup misses are not errors: they are logged and answered with a
//! fallback. The types here cover the startup path only.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading, parsing or writing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {path:?}")]
    ContentFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid content json")]
    ContentJson(#[from] serde_json::Error),

    #[error("failed to load settings from {path:?}: {message}")]
    Settings { path: PathBuf, message: String },

    #[error("failed to save settings to {path:?}")]
    SaveSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Content registry rejected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("empty content table(s): {}", .0.join(", "))]
    EmptyTables(Vec<&'static str>),
}
