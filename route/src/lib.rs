//! Ferry Route
//!
//! Routing decisions and the Router seam.
//!
//! Responsibilities:
//! - Represent a routing decision (ordered, non-empty target list)
//! - Define the Router trait the statement layer calls per logical statement
//! - Routing error types
//!
//! Route computation itself (rule evaluation, load balancing, SQL
//! classification) lives behind the Router trait and is supplied by the
//! embedding application.

mod decision;
mod error;
mod router;

pub use decision::{RouteTarget, RoutingDecision};
pub use error::{RouteError, RouteResult};
pub use router::Router;
