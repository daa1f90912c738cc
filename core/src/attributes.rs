//! Statement attributes.
//!
//! Attributes describe how result sets produced by a statement behave. They
//! are captured when the statement is created and handed to every physical
//! statement the dispatcher opens, so all targets share one configuration.

/// Cursor traversal mode of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSetKind {
    /// Rows can only be read front to back.
    ForwardOnly,
    /// Cursor may move freely; changes made by others are not visible.
    ScrollInsensitive,
    /// Cursor may move freely; changes made by others are visible.
    ScrollSensitive,
}

impl Default for ResultSetKind {
    fn default() -> Self {
        ResultSetKind::ForwardOnly
    }
}

/// Whether a result set may be updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// Result set is read-only.
    ReadOnly,
    /// Result set rows may be updated through the cursor.
    Updatable,
}

impl Default for Concurrency {
    fn default() -> Self {
        Concurrency::ReadOnly
    }
}

/// Whether a result set stays open across a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holdability {
    /// Result set remains open when the transaction commits.
    HoldOverCommit,
    /// Result set is closed when the transaction commits.
    CloseAtCommit,
}

impl Default for Holdability {
    fn default() -> Self {
        Holdability::HoldOverCommit
    }
}

/// The full attribute set a statement was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatementAttributes {
    /// Cursor traversal mode.
    pub kind: ResultSetKind,
    /// Read-only or updatable result sets.
    pub concurrency: Concurrency,
    /// Behavior of open result sets at commit.
    pub holdability: Holdability,
}

impl StatementAttributes {
    /// Create attributes with explicit kind and concurrency, default holdability.
    pub fn new(kind: ResultSetKind, concurrency: Concurrency) -> Self {
        StatementAttributes {
            kind,
            concurrency,
            holdability: Holdability::default(),
        }
    }

    /// Create attributes specifying all three dimensions.
    pub fn with_holdability(
        kind: ResultSetKind,
        concurrency: Concurrency,
        holdability: Holdability,
    ) -> Self {
        StatementAttributes {
            kind,
            concurrency,
            holdability,
        }
    }
}
