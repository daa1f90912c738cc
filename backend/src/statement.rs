//! Physical statement and connection provider seams.

use ferry_core::{KeyRetrieval, StatementAttributes};

use crate::error::BackendResult;
use crate::rows::RowSet;

/// One driver-level statement handle against one physical data source.
///
/// Implementations wrap whatever the underlying driver calls a statement.
/// Driver errors propagate unchanged through these signatures; the fanout
/// layer classifies them but never rewrites them.
pub trait PhysicalStatement {
    /// Execute a query and return its materialized result set.
    fn execute_query(&mut self, sql: &str) -> BackendResult<RowSet>;

    /// Execute a write statement and return the number of affected rows.
    ///
    /// The key retrieval request reaches the driver unchanged.
    fn execute_update(&mut self, sql: &str, keys: &KeyRetrieval) -> BackendResult<u64>;

    /// Execute arbitrary SQL. Returns true when the statement produced a
    /// result set, false when it produced an update count.
    fn execute(&mut self, sql: &str, keys: &KeyRetrieval) -> BackendResult<bool>;

    /// Generated keys from the last write, empty when the driver produced none.
    fn generated_keys(&mut self) -> BackendResult<RowSet>;

    /// The pending result set of the last execution, or `None` when the last
    /// execution produced an update count.
    fn result_set(&mut self) -> BackendResult<Option<RowSet>>;

    /// Close the handle. Idempotent at the driver level.
    fn close(&mut self) -> BackendResult<()>;
}

/// Opens physical statements against named data sources.
///
/// Providers are shared seams: the statement layer holds one by reference
/// and may open several statements per logical call. A provider may pool
/// connections internally; attribute propagation to the driver is its
/// responsibility.
pub trait ConnectionProvider {
    /// The statement handle type this provider opens.
    type Statement: PhysicalStatement;

    /// Open a statement against the named data source.
    ///
    /// Fails when the data source is unknown or unreachable.
    fn open_statement(
        &self,
        data_source: &str,
        attributes: &StatementAttributes,
    ) -> BackendResult<Self::Statement>;
}
