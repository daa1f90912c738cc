//! The active physical statement set.

use ferry_backend::{BackendResult, PhysicalStatement};

/// Ordered collection of the physical statements opened by the most recent
/// dispatch, each paired with the data source it was routed to.
///
/// Between logical calls the set holds exactly one statement per target the
/// last call actually routed. After a partial dispatch failure it holds the
/// statements opened before the failure point, so the next clear or close
/// reclaims them. The set is owned by one logical statement and never shared.
pub struct RoutedStatements<S: PhysicalStatement> {
    entries: Vec<(String, S)>,
}

impl<S: PhysicalStatement> RoutedStatements<S> {
    /// Create an empty set.
    pub fn new() -> Self {
        RoutedStatements {
            entries: Vec::new(),
        }
    }

    /// Number of active statements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no statements are active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Data source names of the active statements, in registration order.
    pub fn data_sources(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Register a newly opened statement and hand back a handle to it.
    ///
    /// Registration happens before the first execution on the statement, so
    /// a failure mid-dispatch still leaves the statement reclaimable.
    pub fn register(&mut self, data_source: impl Into<String>, statement: S) -> &mut S {
        self.entries.push((data_source.into(), statement));
        let index = self.entries.len() - 1;
        &mut self.entries[index].1
    }

    /// The single active statement, when exactly one is registered.
    pub fn sole_mut(&mut self) -> Option<&mut S> {
        if self.entries.len() == 1 {
            self.entries.first_mut().map(|(_, statement)| statement)
        } else {
            None
        }
    }

    /// Close every active statement and empty the set.
    ///
    /// Best-effort: a close failure never short-circuits the sweep. Every
    /// statement is closed, the set always ends empty, and the first failure
    /// is returned after the sweep completes.
    pub fn clear(&mut self) -> BackendResult<()> {
        let mut first_failure = None;
        for (_, mut statement) in self.entries.drain(..) {
            if let Err(error) = statement.close() {
                if first_failure.is_none() {
                    first_failure = Some(error);
                }
            }
        }
        match first_failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<S: PhysicalStatement> Default for RoutedStatements<S> {
    fn default() -> Self {
        RoutedStatements::new()
    }
}

impl<S: PhysicalStatement> Drop for RoutedStatements<S> {
    fn drop(&mut self) {
        // No caller to report to during unwind; release what remains.
        for (_, statement) in self.entries.iter_mut() {
            let _ = statement.close();
        }
    }
}
