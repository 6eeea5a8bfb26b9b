//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur while loading an assessment template bundle
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read templates file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML templates: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON templates: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid templates: {0}")]
    Validation(#[from] ValidationError),
}
