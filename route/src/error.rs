//! Routing error types.

use thiserror::Error;

/// Routing errors.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The SQL text could not be classified for routing.
    #[error("cannot classify statement for routing: {message}")]
    Classification { message: String },

    /// No physical data source could be determined for the statement.
    #[error("no data source available: {message}")]
    NoDataSource { message: String },

    /// A routing decision was constructed with zero targets.
    #[error("routing decision has no targets")]
    EmptyDecision,
}

impl RouteError {
    pub fn classification(message: impl Into<String>) -> Self {
        Self::Classification {
            message: message.into(),
        }
    }

    pub fn no_data_source(message: impl Into<String>) -> Self {
        Self::NoDataSource {
            message: message.into(),
        }
    }
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
