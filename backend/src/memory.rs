//! In-memory backend.
//!
//! A scriptable backend for tests and embedded use. Each named data source
//! carries a script of canned responses plus one-shot failure injections,
//! and every physical operation is recorded in a shared event log so callers
//! can assert on open order, close counts, and parameter passthrough.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use ferry_core::{KeyRetrieval, StatementAttributes};

use crate::error::{BackendError, BackendResult};
use crate::rows::RowSet;
use crate::statement::{ConnectionProvider, PhysicalStatement};

// Script state is plain data; a poisoned lock still holds a usable value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One observable physical operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// A statement was opened against a data source.
    Opened {
        data_source: String,
        attributes: StatementAttributes,
    },
    /// A query was executed.
    Query { data_source: String, sql: String },
    /// A write statement was executed.
    Update {
        data_source: String,
        sql: String,
        keys: KeyRetrieval,
    },
    /// Arbitrary SQL was executed.
    Execute {
        data_source: String,
        sql: String,
        keys: KeyRetrieval,
    },
    /// Generated keys were read.
    Keys { data_source: String },
    /// The pending result set was read.
    ResultSet { data_source: String },
    /// A statement was closed.
    Closed { data_source: String },
    /// A close attempt failed.
    CloseFailed { data_source: String },
}

/// Shared, ordered record of every physical operation across all sources.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<BackendEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        EventLog::default()
    }

    /// Append an event.
    pub fn record(&self, event: BackendEvent) {
        lock(&self.events).push(event);
    }

    /// Snapshot of all events in occurrence order.
    pub fn events(&self) -> Vec<BackendEvent> {
        lock(&self.events).clone()
    }

    /// Number of events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&BackendEvent) -> bool) -> usize {
        lock(&self.events).iter().filter(|e| predicate(e)).count()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        lock(&self.events).clear();
    }
}

/// Scripted behavior of one data source.
#[derive(Debug, Default)]
struct SourceScript {
    /// Canned result sets by SQL text.
    queries: HashMap<String, RowSet>,
    /// Canned affected-row counts by SQL text.
    updates: HashMap<String, u64>,
    /// Canned execute outcomes (true = yields a result set) by SQL text.
    executes: HashMap<String, bool>,
    /// Canned generated-key row sets by SQL text.
    generated_keys: HashMap<String, RowSet>,
    /// One-shot failure for the next open.
    fail_next_open: Option<String>,
    /// One-shot failure for the next execute operation.
    fail_next_execute: Option<String>,
    /// One-shot failure for the next close.
    fail_next_close: Option<String>,
}

/// Handle to one named in-memory data source.
///
/// Cloning the handle shares the underlying script, so a source obtained
/// from the backend before statements open against it can still inject
/// failures afterwards.
#[derive(Debug, Clone)]
pub struct MemoryDataSource {
    name: String,
    script: Arc<Mutex<SourceScript>>,
}

impl MemoryDataSource {
    fn new(name: impl Into<String>) -> Self {
        MemoryDataSource {
            name: name.into(),
            script: Arc::new(Mutex::new(SourceScript::default())),
        }
    }

    /// Name of this data source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Script the result set returned for a query.
    pub fn on_query(&self, sql: impl Into<String>, rows: RowSet) {
        lock(&self.script).queries.insert(sql.into(), rows);
    }

    /// Script the affected-row count returned for a write statement.
    pub fn on_update(&self, sql: impl Into<String>, count: u64) {
        lock(&self.script).updates.insert(sql.into(), count);
    }

    /// Script whether arbitrary execution of this SQL yields a result set.
    pub fn on_execute(&self, sql: impl Into<String>, yields_rows: bool) {
        lock(&self.script).executes.insert(sql.into(), yields_rows);
    }

    /// Script the generated keys reported after a write of this SQL.
    pub fn on_generated_keys(&self, sql: impl Into<String>, keys: RowSet) {
        lock(&self.script).generated_keys.insert(sql.into(), keys);
    }

    /// Fail the next statement open against this source.
    pub fn fail_next_open(&self, message: impl Into<String>) {
        lock(&self.script).fail_next_open = Some(message.into());
    }

    /// Fail the next execute operation on any statement of this source.
    pub fn fail_next_execute(&self, message: impl Into<String>) {
        lock(&self.script).fail_next_execute = Some(message.into());
    }

    /// Fail the next close on any statement of this source.
    pub fn fail_next_close(&self, message: impl Into<String>) {
        lock(&self.script).fail_next_close = Some(message.into());
    }
}

/// In-memory connection provider over named scriptable data sources.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    sources: HashMap<String, MemoryDataSource>,
    log: EventLog,
}

impl MemoryBackend {
    /// Create a backend with no data sources.
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Add a data source and return its handle.
    pub fn add_source(&mut self, name: impl Into<String>) -> MemoryDataSource {
        let source = MemoryDataSource::new(name);
        self.sources
            .insert(source.name.clone(), source.clone());
        source
    }

    /// Handle to a previously added data source.
    pub fn source(&self, name: &str) -> Option<MemoryDataSource> {
        self.sources.get(name).cloned()
    }

    /// The shared event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<BackendEvent> {
        self.log.events()
    }
}

impl ConnectionProvider for MemoryBackend {
    type Statement = MemoryStatement;

    fn open_statement(
        &self,
        data_source: &str,
        attributes: &StatementAttributes,
    ) -> BackendResult<MemoryStatement> {
        let source = self.sources.get(data_source).ok_or_else(|| {
            BackendError::unreachable(data_source, "unknown data source")
        })?;

        if let Some(message) = lock(&source.script).fail_next_open.take() {
            return Err(BackendError::unreachable(data_source, message));
        }

        self.log.record(BackendEvent::Opened {
            data_source: data_source.to_string(),
            attributes: *attributes,
        });

        Ok(MemoryStatement {
            data_source: data_source.to_string(),
            script: Arc::clone(&source.script),
            log: self.log.clone(),
            closed: false,
            pending_rows: None,
            pending_keys: RowSet::empty(),
        })
    }
}

/// Physical statement over one in-memory data source.
///
/// Tracks the pending result set and generated keys across calls, the way a
/// driver statement would, and rejects use after close.
#[derive(Debug)]
pub struct MemoryStatement {
    data_source: String,
    script: Arc<Mutex<SourceScript>>,
    log: EventLog,
    closed: bool,
    pending_rows: Option<RowSet>,
    pending_keys: RowSet,
}

impl MemoryStatement {
    /// Name of the data source this statement runs against.
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    fn check_open(&self) -> BackendResult<()> {
        if self.closed {
            return Err(BackendError::statement_closed(&self.data_source));
        }
        Ok(())
    }

    fn check_execute_failure(&self) -> BackendResult<()> {
        if let Some(message) = lock(&self.script).fail_next_execute.take() {
            return Err(BackendError::execution(&self.data_source, message));
        }
        Ok(())
    }
}

impl PhysicalStatement for MemoryStatement {
    fn execute_query(&mut self, sql: &str) -> BackendResult<RowSet> {
        self.check_open()?;
        self.check_execute_failure()?;

        let rows = lock(&self.script)
            .queries
            .get(sql)
            .cloned()
            .unwrap_or_else(RowSet::empty);

        self.pending_rows = Some(rows.clone());
        self.pending_keys = RowSet::empty();
        self.log.record(BackendEvent::Query {
            data_source: self.data_source.clone(),
            sql: sql.to_string(),
        });
        Ok(rows)
    }

    fn execute_update(&mut self, sql: &str, keys: &KeyRetrieval) -> BackendResult<u64> {
        self.check_open()?;
        self.check_execute_failure()?;

        let (count, generated) = {
            let script = lock(&self.script);
            let count = script.updates.get(sql).copied().unwrap_or(0);
            let generated = script
                .generated_keys
                .get(sql)
                .cloned()
                .unwrap_or_else(RowSet::empty);
            (count, generated)
        };

        self.pending_rows = None;
        self.pending_keys = generated;
        self.log.record(BackendEvent::Update {
            data_source: self.data_source.clone(),
            sql: sql.to_string(),
            keys: keys.clone(),
        });
        Ok(count)
    }

    fn execute(&mut self, sql: &str, keys: &KeyRetrieval) -> BackendResult<bool> {
        self.check_open()?;
        self.check_execute_failure()?;

        let (yields_rows, rows, generated) = {
            let script = lock(&self.script);
            let yields_rows = script
                .executes
                .get(sql)
                .copied()
                .unwrap_or_else(|| script.queries.contains_key(sql));
            let rows = script.queries.get(sql).cloned().unwrap_or_else(RowSet::empty);
            let generated = script
                .generated_keys
                .get(sql)
                .cloned()
                .unwrap_or_else(RowSet::empty);
            (yields_rows, rows, generated)
        };

        self.pending_rows = if yields_rows { Some(rows) } else { None };
        self.pending_keys = generated;
        self.log.record(BackendEvent::Execute {
            data_source: self.data_source.clone(),
            sql: sql.to_string(),
            keys: keys.clone(),
        });
        Ok(yields_rows)
    }

    fn generated_keys(&mut self) -> BackendResult<RowSet> {
        self.check_open()?;
        self.log.record(BackendEvent::Keys {
            data_source: self.data_source.clone(),
        });
        Ok(self.pending_keys.clone())
    }

    fn result_set(&mut self) -> BackendResult<Option<RowSet>> {
        self.check_open()?;
        self.log.record(BackendEvent::ResultSet {
            data_source: self.data_source.clone(),
        });
        Ok(self.pending_rows.clone())
    }

    fn close(&mut self) -> BackendResult<()> {
        if self.closed {
            return Ok(());
        }

        if let Some(message) = lock(&self.script).fail_next_close.take() {
            self.log.record(BackendEvent::CloseFailed {
                data_source: self.data_source.clone(),
            });
            return Err(BackendError::close_failed(&self.data_source, message));
        }

        self.closed = true;
        self.log.record(BackendEvent::Closed {
            data_source: self.data_source.clone(),
        });
        Ok(())
    }
}
