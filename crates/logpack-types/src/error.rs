//! Error types for logpack

use thiserror::Error;

/// Rejections of a user-supplied log length.
///
/// The display strings are the exact messages shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LengthError {
    /// Input was empty or not a number
    #[error("ERROR: LOG LENGTH MUST BE NUMERIC.")]
    MalformedInput(String),

    /// Parsed number was zero or negative
    #[error("ERROR: INVALID LOG LENGTH.")]
    InvalidLength(f64),

    /// Strict mode only: length is not one of the offered lengths
    #[error("ERROR: LOG LENGTH NOT OFFERED.")]
    NotOffered(f64),
}

impl LengthError {
    /// Stable machine-readable identifier used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            LengthError::MalformedInput(_) => "malformed_input",
            LengthError::InvalidLength(_) => "invalid_length",
            LengthError::NotOffered(_) => "not_offered",
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
