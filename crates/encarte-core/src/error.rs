//! Error types.

use thiserror::Error;

/// Rejected editor input. No state changes when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Product name missing or blank.
    #[error("Product name is required")]
    MissingName,

    /// Regular price missing.
    #[error("Product price is required")]
    MissingPrice,

    /// Price text is not a number.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Price below zero.
    #[error("Price cannot be negative: {0}")]
    NegativePrice(String),
}

/// Errors that can occur in flyer operations.
#[derive(Error, Debug)]
pub enum EncarteError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Filesystem error.
    #[error("IO error: {0}")]
    IoError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Image lookup failed.
    #[error("Image search failed: {0}")]
    ImageSearchError(String),
}

#[cfg(feature = "storage")]
impl From<encarte_db::DbError> for EncarteError {
    fn from(e: encarte_db::DbError) -> Self {
        EncarteError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for EncarteError {
    fn from(e: serde_json::Error) -> Self {
        EncarteError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for EncarteError {
    fn from(e: std::io::Error) -> Self {
        EncarteError::IoError(e.to_string())
    }
}
