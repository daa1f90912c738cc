//! Routing decisions.
//!
//! A decision is the ordered set of physical data sources one logical
//! statement must reach. Decisions are ephemeral: the router produces one per
//! logical call and the statement layer consumes it immediately. Nothing
//! retains a decision across calls.

use crate::error::{RouteError, RouteResult};

/// One physical data source named by a routing decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    data_source: String,
}

impl RouteTarget {
    /// Create a target naming a physical data source.
    pub fn new(data_source: impl Into<String>) -> Self {
        RouteTarget {
            data_source: data_source.into(),
        }
    }

    /// Name of the physical data source.
    pub fn data_source(&self) -> &str {
        &self.data_source
    }
}

/// An ordered, non-empty list of route targets.
///
/// Dispatch follows this order, so routers control which target executes
/// first and which target's result wins where an operation keeps only the
/// last result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    targets: Vec<RouteTarget>,
}

impl RoutingDecision {
    /// Create a decision from an ordered target list.
    ///
    /// Fails with [`RouteError::EmptyDecision`] when the list is empty: a
    /// statement routed nowhere is a routing bug, not a no-op.
    pub fn new(targets: Vec<RouteTarget>) -> RouteResult<Self> {
        if targets.is_empty() {
            return Err(RouteError::EmptyDecision);
        }
        Ok(RoutingDecision { targets })
    }

    /// Create a decision routing to a single data source.
    pub fn single(data_source: impl Into<String>) -> Self {
        RoutingDecision {
            targets: vec![RouteTarget::new(data_source)],
        }
    }

    /// The targets in dispatch order.
    pub fn targets(&self) -> &[RouteTarget] {
        &self.targets
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the decision names exactly one target.
    pub fn is_single(&self) -> bool {
        self.targets.len() == 1
    }

    /// The only target, when the decision is single.
    pub fn sole(&self) -> Option<&RouteTarget> {
        if self.is_single() {
            self.targets.first()
        } else {
            None
        }
    }

    /// Iterate over targets in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteTarget> {
        self.targets.iter()
    }
}
