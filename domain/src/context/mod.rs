//! Context domain module
//!
//! [`ContextItem`] is the slice of a conversation turn the command layer
//! touches. The item is owned by the caller; operations here only read or
//! fill in its `input`, `output`, `tool_calls` and `extra` fields.

pub mod entities;
pub mod outputs;

pub use entities::{
    ContextItem, EXTRA_TOOL_CALLS, EXTRA_TOOL_CALLS_OUTPUTS, EXTRA_TOOL_OUTPUT, ToolOutput,
};
pub use outputs::{CorrelatedOutputs, correlate_outputs};
