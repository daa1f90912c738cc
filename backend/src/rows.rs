//! Materialized result row sets.

use ferry_core::Value;

/// A fully materialized result set from one physical data source.
///
/// The fanout layer hands row sets back to the caller unmodified. It never
/// merges rows across data sources and never inspects cell values, so the
/// shape here is deliberately plain: column names plus row vectors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowSet {
    /// Column names, in select order.
    pub columns: Vec<String>,
    /// Row values; every row has one cell per column.
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    /// Create a row set from columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        RowSet { columns, rows }
    }

    /// Create an empty row set with no columns and no rows.
    pub fn empty() -> Self {
        RowSet::default()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the row set holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
