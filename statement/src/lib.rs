//! Ferry Statement
//!
//! The statement-fanout execution core.
//!
//! Responsibilities:
//! - Route each logical statement through the Router seam
//! - Open and register physical statements per routed target
//! - Dispatch sequentially in routing order and aggregate results
//! - Track and release the active physical statement set
//! - Statement error types (the full failure taxonomy of a logical call)

mod error;
mod fanout;
mod routed;

pub use error::{StatementError, StatementResult};
pub use fanout::FanoutStatement;
pub use routed::RoutedStatements;
