//! Tool call domain module
//!
//! Providers report tool calls in different shapes:
//!
//! | Source | ID field | Name | Arguments |
//! |--------|----------|------|-----------|
//! | Chat Completions | `id` | `function.name` | JSON string |
//! | Responses API | `call_id` / `id` | `name` | JSON string |
//! | Agent framework | `tool_id` | `tool_name` | mapping |
//!
//! All of them normalize to [`NativeToolCall`], which maps 1:1 onto a
//! [`CommandInvocation`](crate::command::CommandInvocation).

pub mod conversion;
pub mod entities;

pub use conversion::{Conversion, Diagnostic};
pub use entities::{
    AgentToolCall, ChatCompletionsToolCall, FunctionCall, NativeToolCall, ProviderToolCall,
    RawFunctionCall, ResponsesApiToolCall,
};
