//! Error handling module for shelftui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Catalog, store and UI code all report failures through these types.

use thiserror::Error;

/// Main error type for shelftui
#[derive(Error, Debug)]
pub enum ShelfError {
    /// IO errors (file operations, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No record matched a title-keyed operation
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Validation errors at the input boundary (year range, empty fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Writing the catalog file failed after serialization
    #[error("Persist error: {0}")]
    Persist(String),
}

/// Result type alias for shelftui operations
pub type Result<T> = std::result::Result<T, ShelfError>;

// Convenient error constructors
impl ShelfError {
    /// Create a not-found error for the given title
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound(title.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a persistence error
    pub fn persist(msg: impl Into<String>) -> Self {
        Self::Persist(msg.into())
    }

    /// Whether this is the user-facing "no such title" case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
