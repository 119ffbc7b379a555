//! Conversions from provider tool-call shapes to [`NativeToolCall`].
//!
//! Every batch conversion is partial: one bad item never aborts the batch.
//! Dropped items come back as [`Diagnostic`]s next to the converted ones so
//! callers decide what to log.

use crate::command::entities::{CommandInvocation, Params};
use crate::core::error::ToolCallError;
use crate::tool_call::entities::{
    AgentToolCall, ChatCompletionsToolCall, FunctionCall, NativeToolCall, ProviderToolCall,
    ResponsesApiToolCall, FUNCTION_TYPE,
};
use serde_json::Value;

/// An item dropped from a batch conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Position of the item in the input batch
    pub index: usize,
    pub error: ToolCallError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {}: {}", self.index, self.error)
    }
}

/// Items converted from a batch, plus the ones that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<T> {
    pub items: Vec<T>,
    pub dropped: Vec<Diagnostic>,
}

impl<T> Default for Conversion<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            dropped: Vec::new(),
        }
    }
}

impl<T> Conversion<T> {
    fn push(&mut self, index: usize, result: Result<T, ToolCallError>) {
        match result {
            Ok(item) => self.items.push(item),
            Err(error) => self.dropped.push(Diagnostic { index, error }),
        }
    }

    /// Dropped items that indicate malformed data rather than an expected
    /// shape difference between providers.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.dropped.iter().filter(|d| !d.error.is_shape_mismatch())
    }
}

/// Parse a JSON `arguments` string into a parameter mapping.
///
/// Blank text means "no arguments". Anything other than a JSON object is
/// rejected.
pub fn parse_arguments(name: &str, text: &str) -> Result<Params, ToolCallError> {
    if text.trim().is_empty() {
        return Ok(Params::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(params)) => Ok(params),
        Ok(_) => Err(ToolCallError::ArgumentsNotObject {
            name: name.to_string(),
        }),
        Err(e) => Err(ToolCallError::InvalidArguments {
            name: name.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Convert Chat Completions tool calls.
pub fn from_chat_completions(calls: &[ChatCompletionsToolCall]) -> Conversion<NativeToolCall> {
    let mut conversion = Conversion::default();
    for (index, call) in calls.iter().enumerate() {
        conversion.push(index, chat_completions_call(call));
    }
    conversion
}

fn chat_completions_call(call: &ChatCompletionsToolCall) -> Result<NativeToolCall, ToolCallError> {
    let arguments = parse_arguments(&call.function.name, &call.function.arguments)?;
    Ok(NativeToolCall::new(
        call.id.clone(),
        call.function.name.clone(),
        arguments,
    ))
}

/// Convert Responses API output items. Items without a `name` are not
/// function calls and are dropped as a shape mismatch.
pub fn from_responses_api(items: &[ResponsesApiToolCall]) -> Conversion<NativeToolCall> {
    let mut conversion = Conversion::default();
    for (index, item) in items.iter().enumerate() {
        conversion.push(index, responses_api_call(item));
    }
    conversion
}

fn responses_api_call(item: &ResponsesApiToolCall) -> Result<NativeToolCall, ToolCallError> {
    let name = item
        .name
        .as_deref()
        .ok_or(ToolCallError::MissingField("name"))?;
    let arguments = parse_arguments(name, item.arguments.as_deref().unwrap_or_default())?;
    Ok(NativeToolCall::new(item.correlation_id(), name, arguments))
}

/// Convert agent framework tool calls.
pub fn from_agent_tool_calls(calls: &[AgentToolCall]) -> Conversion<NativeToolCall> {
    Conversion {
        items: calls
            .iter()
            .map(|call| {
                NativeToolCall::new(
                    call.tool_id.clone(),
                    call.tool_name.clone(),
                    call.tool_kwargs.clone(),
                )
            })
            .collect(),
        dropped: Vec::new(),
    }
}

/// Convert a mixed batch of provider tool calls, preserving order.
pub fn unpack(calls: &[ProviderToolCall]) -> Conversion<NativeToolCall> {
    let mut conversion = Conversion::default();
    for (index, call) in calls.iter().enumerate() {
        let result = match call {
            ProviderToolCall::ChatCompletions(call) => chat_completions_call(call),
            ProviderToolCall::ResponsesApi(item) => responses_api_call(item),
            ProviderToolCall::Agent(call) => Ok(NativeToolCall::new(
                call.tool_id.clone(),
                call.tool_name.clone(),
                call.tool_kwargs.clone(),
            )),
        };
        conversion.push(index, result);
    }
    conversion
}

/// Finalize tool calls accumulated from a streamed response.
///
/// Each raw item must look like `{id, type, function: {name, arguments}}`
/// with `arguments` still a JSON string. Items without `function` or
/// `arguments`, whose `arguments` were already parsed, or whose arguments do
/// not parse are dropped.
pub fn from_streamed_chunks(raw: &[Value]) -> Conversion<NativeToolCall> {
    let mut conversion = Conversion::default();
    for (index, item) in raw.iter().enumerate() {
        conversion.push(index, streamed_call(item));
    }
    conversion
}

fn streamed_call(item: &Value) -> Result<NativeToolCall, ToolCallError> {
    let function = item
        .get("function")
        .and_then(Value::as_object)
        .ok_or(ToolCallError::MissingField("function"))?;
    let name = function
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let arguments = match function.get("arguments") {
        None => return Err(ToolCallError::MissingField("arguments")),
        Some(Value::String(text)) => parse_arguments(name, text)?,
        Some(_) => return Err(ToolCallError::AlreadyParsed),
    };

    Ok(NativeToolCall {
        id: item
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        call_type: item
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(FUNCTION_TYPE)
            .to_string(),
        function: FunctionCall {
            name: name.to_string(),
            arguments,
        },
    })
}

/// `cmd → function.name`, `params → function.arguments`.
pub fn invocation_to_tool_call(invocation: &CommandInvocation) -> NativeToolCall {
    NativeToolCall::from_invocation(invocation)
}

/// `function.name → cmd`, `function.arguments → params`.
pub fn tool_call_to_invocation(tool_call: &NativeToolCall) -> CommandInvocation {
    tool_call.to_invocation()
}
