//! Statement error types.

use ferry_backend::BackendError;
use ferry_route::RouteError;
use thiserror::Error;

/// Statement errors.
#[derive(Debug, Error)]
pub enum StatementError {
    /// SQL text is empty.
    #[error("sql text is empty")]
    EmptySql,

    /// The logical statement has been closed.
    #[error("statement is closed")]
    Closed,

    /// Routing failed.
    #[error("routing error: {0}")]
    Route(#[from] RouteError),

    /// Opening a physical statement failed.
    #[error("connection error: {0}")]
    Connection(BackendError),

    /// A physical execution failed.
    #[error("execution error: {0}")]
    Execution(BackendError),

    /// The operation is only defined against a single routed target.
    #[error("{operation} requires exactly one routed target, found {found}")]
    SingleRouteRequired {
        operation: &'static str,
        found: usize,
    },

    /// Closing prior physical statements failed.
    #[error("cleanup error: {0}")]
    Cleanup(BackendError),
}

/// Result type for statement operations.
pub type StatementResult<T> = Result<T, StatementError>;
