//! Error types for Wayfarer

use thiserror::Error;

/// Core Wayfarer errors
#[derive(Error, Debug)]
pub enum WayfarerError {
    // Source errors
    #[error("Catalog source unreadable: {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("HTTP error! status: {status} ({location})")]
    HttpStatus { status: u16, location: String },

    // Document errors
    #[error("Invalid catalog document: {0}")]
    InvalidDocument(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for WayfarerError {
    fn from(err: serde_json::Error) -> Self {
        WayfarerError::InvalidDocument(err.to_string())
    }
}

/// Result type for Wayfarer operations
pub type WayfarerResult<T> = Result<T, WayfarerError>;
