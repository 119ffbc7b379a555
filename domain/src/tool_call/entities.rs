//! Tool call entities: the provider shapes and the normalized native form.

use crate::command::entities::{CommandInvocation, Params};
use serde::{Deserialize, Serialize};

/// Default `type` of a native tool call.
pub const FUNCTION_TYPE: &str = "function";

fn function_type() -> String {
    FUNCTION_TYPE.to_string()
}

/// Function part of a normalized tool call, arguments already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Params,
}

/// A tool call in normalized provider form:
/// `{id, type: "function", function: {name, arguments}}`.
///
/// `id` must be echoed back with the tool output so the provider can
/// correlate results with calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeToolCall {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: FunctionCall,
}

impl NativeToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Params) -> Self {
        Self {
            id: id.into(),
            call_type: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments,
            },
        }
    }

    /// Name of the command this call maps to.
    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// `function.name → cmd`, `function.arguments → params`, `id → id`.
    pub fn to_invocation(&self) -> CommandInvocation {
        let invocation = CommandInvocation::new(self.function.name.clone())
            .with_params(self.function.arguments.clone());
        if self.id.is_empty() {
            invocation
        } else {
            invocation.with_id(self.id.clone())
        }
    }

    /// `cmd → function.name`, `params → function.arguments`; a missing id
    /// becomes the empty string.
    pub fn from_invocation(invocation: &CommandInvocation) -> Self {
        Self::new(
            invocation.id.clone().unwrap_or_default(),
            invocation.cmd.clone(),
            invocation.params.clone(),
        )
    }
}

/// Function part of a Chat Completions tool call; `arguments` is JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

/// Tool call as returned by the Chat Completions API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionsToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: RawFunctionCall,
}

/// Output item as returned by the Responses API.
///
/// Only `function_call` items carry a `name`; other item kinds (messages,
/// reasoning) appear in the same list and are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsesApiToolCall {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl ResponsesApiToolCall {
    /// The ID used to correlate outputs: `call_id`, then `id`, then `""`.
    pub fn correlation_id(&self) -> String {
        self.call_id
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_default()
    }
}

/// Tool call as produced by an agent framework; arguments are already a mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentToolCall {
    pub tool_id: String,
    pub tool_name: String,
    #[serde(default)]
    pub tool_kwargs: Params,
}

/// Any of the provider tool-call shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ProviderToolCall {
    ChatCompletions(ChatCompletionsToolCall),
    ResponsesApi(ResponsesApiToolCall),
    Agent(AgentToolCall),
}
