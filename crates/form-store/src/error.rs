use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when serializing or exporting the configuration.
///
/// Store mutations themselves cannot fail: invalid navigation targets are
/// clamped and bad custom-role names are silent no-ops.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Configuration could not be serialized to JSON
    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An export sink failed to accept the serialized configuration
    #[error("failed to export configuration to {path}: {source}")]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
