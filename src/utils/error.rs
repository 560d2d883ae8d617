//! Error handling for MysTeX
//!
//! The escapers themselves are total. Errors only come from the edges:
//! reading input, parsing index entries and loading configuration.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// Input could not be read as expected (e.g. malformed index JSON)
    InvalidInput { message: String },
    /// Configuration file could not be parsed
    Config {
        message: String,
        path: Option<String>,
    },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::Config { message, path } => {
                if let Some(p) = path {
                    write!(f, "Config error in {}: {}", p, message)
                } else {
                    write!(f, "Config error: {}", message)
                }
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::InvalidInput {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
