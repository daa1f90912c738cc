//! Ferry Backend
//!
//! Physical statement seam and the in-memory backend.
//!
//! Responsibilities:
//! - Define the PhysicalStatement trait (one driver handle, one data source)
//! - Define the ConnectionProvider trait (opens statements by source name)
//! - Materialized row sets
//! - Scriptable in-memory backend with an observable event log
//! - Backend error types

mod error;
mod memory;
mod rows;
mod statement;

pub use error::{BackendError, BackendResult};
pub use memory::{BackendEvent, EventLog, MemoryBackend, MemoryDataSource, MemoryStatement};
pub use rows::RowSet;
pub use statement::{ConnectionProvider, PhysicalStatement};
