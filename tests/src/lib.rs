//! Ferry Tests
//!
//! Integration test harness for the Ferry workspace.
//!
//! Responsibilities:
//! - Scripted router with a call log
//! - Fixture wiring router, in-memory backend, and statement factories
//! - Prelude re-exporting the harness plus the Ferry types suites use


pub use fixture::Fixture;
pub use router::{RouteCall, ScriptedRouter};

/// Everything an integration suite needs.
pub mod prelude {
    pub use crate::fixture::Fixture;
    pub use crate::router::{RouteCall, ScriptedRouter};

    pub use ferry_backend::{
        BackendError, BackendEvent, MemoryBackend, MemoryDataSource, RowSet,
    };
    pub use ferry_core::{
        Concurrency, Holdability, KeyRetrieval, ResultSetKind, StatementAttributes, Value,
    };
    pub use ferry_route::{RouteError, RouteTarget, Router, RoutingDecision};
    pub use ferry_statement::{FanoutStatement, StatementError};
}
