//! The Router seam.

use ferry_core::Value;

use crate::decision::RoutingDecision;
use crate::error::RouteResult;

/// Computes where a logical statement executes.
///
/// Implementations classify the SQL text (read vs write, hinted, broadcast)
/// and pick physical data sources accordingly. The statement layer calls
/// `route` once per logical execution and dispatches to every target in the
/// returned decision, in order.
///
/// For statement-level execution the parameter slice is always empty and
/// `provisional` is always false: parameters exist for prepared routing, and
/// provisional routes are lookup-only probes that must not consume
/// load-balancer state. Statement execution routes definitively.
pub trait Router {
    /// Route one logical statement to its physical targets.
    fn route(
        &self,
        sql: &str,
        parameters: &[Value],
        provisional: bool,
    ) -> RouteResult<RoutingDecision>;
}
