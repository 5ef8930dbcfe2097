//! Error types for catalog loading and configuration.
//!
//! Only the combined-catalog read path is fatal; per-airport fragments
//! degrade to warnings inside the load report, and row-level problems never
//! surface as errors at all.

use thiserror::Error;

/// Errors that can occur while loading a catalog or its configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure (configuration files).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A path expected to be a readable directory is not one.
    #[error("invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
