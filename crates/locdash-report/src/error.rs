//! Error types for dashboard rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while assembling or rendering a dashboard.
///
/// Configuration errors are fatal for the whole run: no partial dashboard
/// is ever emitted.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Referenced asset file does not exist.
    #[error("could not find asset file at {}", path.display())]
    MissingAsset { path: PathBuf },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied override or slot function failed.
    #[error("extension '{name}' failed: {source}")]
    Extension {
        name: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
