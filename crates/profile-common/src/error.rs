//! Error types for the profile imaging crates.

use thiserror::Error;

use crate::bbox::BboxParseError;

/// Result type alias using ProfileError.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Primary error type for parameter, configuration and ingestion problems.
///
/// The render core itself never fails on well-typed samples; these errors
/// surface before a render starts.
#[derive(Debug, Error)]
pub enum ProfileError {
    // === Parameter Errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid bounding box: {0}")]
    InvalidBbox(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Unknown value field: {0}")]
    UnknownField(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ProfileError {
    pub fn invalid_parameter(param: &str, message: impl Into<String>) -> Self {
        ProfileError::InvalidParameter {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        ProfileError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Config(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ProfileError {
    fn from(err: serde_yaml::Error) -> Self {
        ProfileError::Config(format!("YAML error: {}", err))
    }
}

impl From<BboxParseError> for ProfileError {
    fn from(err: BboxParseError) -> Self {
        ProfileError::InvalidBbox(err.to_string())
    }
}
