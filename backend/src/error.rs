//! Backend error types.

use thiserror::Error;

/// Backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The named physical data source cannot be reached or is unknown.
    #[error("data source '{data_source}' unreachable: {message}")]
    Unreachable {
        data_source: String,
        message: String,
    },

    /// A physical operation failed on a data source.
    #[error("execution failed on '{data_source}': {message}")]
    Execution {
        data_source: String,
        message: String,
    },

    /// Operation attempted on a closed physical statement.
    #[error("physical statement on '{data_source}' is closed")]
    StatementClosed { data_source: String },

    /// Closing a physical statement failed.
    #[error("close failed on '{data_source}': {message}")]
    CloseFailed {
        data_source: String,
        message: String,
    },
}

impl BackendError {
    pub fn unreachable(data_source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreachable {
            data_source: data_source.into(),
            message: message.into(),
        }
    }

    pub fn execution(data_source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            data_source: data_source.into(),
            message: message.into(),
        }
    }

    pub fn statement_closed(data_source: impl Into<String>) -> Self {
        Self::StatementClosed {
            data_source: data_source.into(),
        }
    }

    pub fn close_failed(data_source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CloseFailed {
            data_source: data_source.into(),
            message: message.into(),
        }
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
