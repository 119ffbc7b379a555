//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod availability;
pub mod command_schema;
pub mod tool_calls;
