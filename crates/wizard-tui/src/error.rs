use thiserror::Error;

/// Errors that can occur in the wizard TUI
#[derive(Error, Debug)]
pub enum TuiError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal backend error
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Serialization or export failure surfaced from the store
    #[error(transparent)]
    Export(#[from] form_store::StoreError),
}

/// Result type alias for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
