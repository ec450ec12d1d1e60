//! Error types for the salary API

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WageError>;

#[derive(Error, Debug)]
pub enum WageError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl WageError {
    /// True for errors the API surfaces as a 404 domain error rather
    /// than a generic 500. Only persistence failures leave the refresh
    /// path, so these are the recognized classes.
    pub fn is_recognized(&self) -> bool {
        matches!(self, WageError::Database(_) | WageError::Cache { .. })
    }
}
