//! Ferry Core Types
//!
//! This crate provides the foundational types used throughout the Ferry stack:
//! - Value types (the Value enum for bound parameters and row cells)
//! - Statement attributes (result-set kind, concurrency, holdability)
//! - Generated-key retrieval requests (KeyRetrieval)

mod attributes;
mod keys;
mod value;

pub use attributes::*;
pub use keys::*;
pub use value::*;
