//! Error types for adminbar
//!
//! Binding and rendering never fail; every anomaly there is resolved by a
//! silent policy. Errors only exist at the edges: reading menu definitions
//! and dumping trees.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for adminbar operations
pub type AdminBarResult<T> = Result<T, AdminBarError>;

/// Main error type for adminbar operations
#[derive(Error, Debug)]
pub enum AdminBarError {
    /// Menu definition could not be parsed
    #[error("invalid menu definition in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu definition file does not exist
    #[error("menu definition not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
