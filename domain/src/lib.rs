//! Domain layer for cmdlayer
//!
//! This crate contains the command model and the pure conversions between
//! its representations. It has no dependencies on infrastructure or
//! presentation concerns, performs no I/O and does no logging.
//!
//! # Core Concepts
//!
//! ## Three forms of a tool call
//!
//! - **Marker text**: `<tool>{"cmd":...,"params":{...}}</tool>` embedded in
//!   model output ([`command::marker`])
//! - **Command invocation**: the canonical `{cmd, params}` ([`CommandInvocation`])
//! - **Native tool call**: provider function calling ([`NativeToolCall`],
//!   described to the provider by a [`FunctionSchema`])
//!
//! ## Best effort
//!
//! Model output is often malformed or truncated. Batch operations never fail
//! as a whole: dropped items are returned as diagnostics next to the
//! converted ones.

pub mod command;
pub mod context;
pub mod core;
pub mod prompt;
pub mod tool_call;
pub mod util;

// Re-export commonly used types
pub use command::{
    CommandDescriptor, CommandInvocation, FunctionSchema, Param, ParamIssue, ParamType, Params,
    SchemaBuild, SyntaxBlock, SyntaxEvent, SyntaxEventKind,
};
pub use context::{ContextItem, CorrelatedOutputs, ToolOutput};
pub use core::{
    error::{MarkerError, SchemaError, ToolCallError},
    mode::Mode,
    model::ModelInfo,
};
pub use prompt::CommandPrompt;
pub use tool_call::{
    AgentToolCall, ChatCompletionsToolCall, Conversion, Diagnostic, FunctionCall, NativeToolCall,
    ProviderToolCall, RawFunctionCall, ResponsesApiToolCall,
};
