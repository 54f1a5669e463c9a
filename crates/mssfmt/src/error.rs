//! Error types for the command-line tool.

use std::path::PathBuf;

/// Errors that can occur while loading, formatting or reporting a script.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// IO error (reading the script or writing output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The script is not UTF-8 text.
    #[error("Script is not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        /// Path to the script.
        path: PathBuf,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
