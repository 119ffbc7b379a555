//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod capabilities;
pub mod function_source;
pub mod schema_sink;
pub mod syntax_collector;
