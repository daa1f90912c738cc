//! The fanout statement.

use ferry_backend::{ConnectionProvider, PhysicalStatement, RowSet};
use ferry_core::{KeyRetrieval, StatementAttributes};
use ferry_route::{Router, RoutingDecision};

use crate::error::{StatementError, StatementResult};
use crate::routed::RoutedStatements;

/// A logical statement fanned out over physical data sources.
///
/// Each execute call routes the SQL text, opens one physical statement per
/// routed target, dispatches sequentially in routing order, and aggregates
/// the per-target results. The statements opened by a call stay registered
/// until the next call clears them, close() runs, or the instance drops.
///
/// One instance serves one caller at a time; every dispatching operation
/// takes `&mut self`. The router and provider are shared collaborators held
/// by reference.
pub struct FanoutStatement<'a, R: Router, P: ConnectionProvider> {
    /// The router (shared).
    router: &'a R,
    /// The connection provider (shared).
    provider: &'a P,
    /// Attributes every physical statement is opened with.
    attributes: StatementAttributes,
    /// Physical statements from the most recent dispatch.
    routed: RoutedStatements<P::Statement>,
    /// Set once close() runs; terminal.
    closed: bool,
}

impl<'a, R: Router, P: ConnectionProvider> FanoutStatement<'a, R, P> {
    /// Create a statement with default attributes.
    pub fn new(router: &'a R, provider: &'a P) -> Self {
        Self::with_attributes(router, provider, StatementAttributes::default())
    }

    /// Create a statement with explicit attributes.
    pub fn with_attributes(
        router: &'a R,
        provider: &'a P,
        attributes: StatementAttributes,
    ) -> Self {
        Self {
            router,
            provider,
            attributes,
            routed: RoutedStatements::new(),
            closed: false,
        }
    }

    /// The attributes this statement opens physical statements with.
    pub fn attributes(&self) -> &StatementAttributes {
        &self.attributes
    }

    /// The active physical statement set.
    pub fn routed(&self) -> &RoutedStatements<P::Statement> {
        &self.routed
    }

    /// Whether close() has run.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Shared prologue of every execute operation: reject closed statements
    /// and empty SQL, release the previous call's statements, then route.
    ///
    /// The precondition checks run before the clear, so a rejected call
    /// leaves the active set untouched. A close failure during the clear
    /// fails the call with `Cleanup`, with the set left empty; the following
    /// invocation starts from a clean set.
    fn prepare(&mut self, sql: &str) -> StatementResult<RoutingDecision> {
        if self.closed {
            return Err(StatementError::Closed);
        }
        if sql.is_empty() {
            return Err(StatementError::EmptySql);
        }
        self.routed.clear().map_err(StatementError::Cleanup)?;
        Ok(self.router.route(sql, &[], false)?)
    }

    /// Execute a query against its routed target and return the result set.
    ///
    /// Queries cannot be fanned out: unless the router picks exactly one
    /// target the call fails with `SingleRouteRequired` before opening any
    /// physical statement.
    pub fn execute_query(&mut self, sql: &str) -> StatementResult<RowSet> {
        let decision = self.prepare(sql)?;
        let target = decision
            .sole()
            .ok_or(StatementError::SingleRouteRequired {
                operation: "execute_query",
                found: decision.len(),
            })?;

        let statement = self
            .provider
            .open_statement(target.data_source(), &self.attributes)
            .map_err(StatementError::Connection)?;
        let statement = self.routed.register(target.data_source(), statement);
        statement
            .execute_query(sql)
            .map_err(StatementError::Execution)
    }

    /// Execute a write statement against every routed target and return the
    /// total number of affected rows.
    ///
    /// Targets dispatch sequentially in routing order; the key retrieval
    /// request reaches every physical statement unchanged. The counts sum
    /// because a fanned-out write affects the union of the targets' rows.
    pub fn execute_update(&mut self, sql: &str, keys: KeyRetrieval) -> StatementResult<u64> {
        let decision = self.prepare(sql)?;

        let mut total: u64 = 0;
        for target in decision.iter() {
            let statement = self
                .provider
                .open_statement(target.data_source(), &self.attributes)
                .map_err(StatementError::Connection)?;
            let statement = self.routed.register(target.data_source(), statement);
            total += statement
                .execute_update(sql, &keys)
                .map_err(StatementError::Execution)?;
        }
        Ok(total)
    }

    /// Execute arbitrary SQL against every routed target. Returns whether
    /// the last target produced a result set.
    ///
    /// Same dispatch loop as execute_update; with multiple targets the last
    /// target's boolean wins, which sequential dispatch makes deterministic.
    pub fn execute(&mut self, sql: &str, keys: KeyRetrieval) -> StatementResult<bool> {
        let decision = self.prepare(sql)?;

        let mut produced_rows = false;
        for target in decision.iter() {
            let statement = self
                .provider
                .open_statement(target.data_source(), &self.attributes)
                .map_err(StatementError::Connection)?;
            let statement = self.routed.register(target.data_source(), statement);
            produced_rows = statement
                .execute(sql, &keys)
                .map_err(StatementError::Execution)?;
        }
        Ok(produced_rows)
    }

    /// Generated keys of the last write, from the sole active statement.
    ///
    /// Key retrieval is only well-defined against a single physical target;
    /// with zero or several active statements the call fails with
    /// `SingleRouteRequired`.
    pub fn generated_keys(&mut self) -> StatementResult<RowSet> {
        if self.closed {
            return Err(StatementError::Closed);
        }
        let found = self.routed.len();
        let statement = self
            .routed
            .sole_mut()
            .ok_or(StatementError::SingleRouteRequired {
                operation: "generated_keys",
                found,
            })?;
        statement
            .generated_keys()
            .map_err(StatementError::Execution)
    }

    /// Pending result cursor of the last execution, from the sole active
    /// statement. `None` when the last execution produced an update count.
    ///
    /// Same single-statement precondition as generated_keys.
    pub fn result_set(&mut self) -> StatementResult<Option<RowSet>> {
        if self.closed {
            return Err(StatementError::Closed);
        }
        let found = self.routed.len();
        let statement = self
            .routed
            .sole_mut()
            .ok_or(StatementError::SingleRouteRequired {
                operation: "result_set",
                found,
            })?;
        statement.result_set().map_err(StatementError::Execution)
    }

    /// Close the logical statement, releasing every active physical
    /// statement.
    ///
    /// Terminal and idempotent: the first call sweeps the active set (a
    /// close failure surfaces as `Cleanup` after the sweep, with the set
    /// emptied either way); repeated calls are no-ops, and every subsequent
    /// execute operation fails with `Closed`.
    pub fn close(&mut self) -> StatementResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.routed.clear().map_err(StatementError::Cleanup)
    }
}
