//! Context item: one turn of a conversation as seen by the command layer.

use crate::tool_call::entities::NativeToolCall;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `extra` key holding the accepted streamed tool calls.
pub const EXTRA_TOOL_CALLS: &str = "tool_calls";
/// `extra` key holding the (initially empty) tool output accumulator.
pub const EXTRA_TOOL_OUTPUT: &str = "tool_output";
/// `extra` key holding the outputs correlated for the provider reply.
pub const EXTRA_TOOL_CALLS_OUTPUTS: &str = "tool_calls_outputs";

/// One conversation turn.
///
/// The command layer only reads and writes `input`, `output`, `tool_calls`
/// and `extra`; the item itself is owned by the caller's context store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextItem {
    /// Input text of the turn (for tool replies: a JSON array of results)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Output text of the turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Native tool calls requested by the model in this turn
    #[serde(default)]
    pub tool_calls: Vec<NativeToolCall>,
    /// Side-channel data for downstream consumers
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl ContextItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_tool_calls(mut self, tool_calls: Vec<NativeToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Output of one tool call, ready to send back to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: Value,
}

impl ToolOutput {
    pub fn new(tool_call_id: impl Into<String>, output: impl Into<Value>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            output: output.into(),
        }
    }

    /// Placeholder output for a call with no matching result.
    pub fn empty(tool_call_id: impl Into<String>) -> Self {
        Self::new(tool_call_id, "")
    }

    /// Output as text: strings as-is, anything else as compact JSON.
    pub fn output_text(&self) -> String {
        match &self.output {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_item_defaults() {
        let ctx = ContextItem::new();
        assert!(ctx.input.is_none());
        assert!(ctx.output.is_none());
        assert!(!ctx.has_tool_calls());
        assert!(ctx.extra.is_empty());
    }

    #[test]
    fn test_context_item_deserializes_native_calls() {
        let ctx: ContextItem = serde_json::from_value(json!({
            "input": "[]",
            "tool_calls": [{"id": "1", "function": {"name": "foo"}}]
        }))
        .unwrap();
        assert_eq!(ctx.tool_calls[0].name(), "foo");
        assert_eq!(ctx.tool_calls[0].call_type, "function");
        assert!(ctx.tool_calls[0].function.arguments.is_empty());
    }

    #[test]
    fn test_output_text() {
        assert_eq!(ToolOutput::empty("1").output_text(), "");
        assert_eq!(ToolOutput::new("1", "done").output_text(), "done");
        assert_eq!(
            ToolOutput::new("1", json!({"ok": true})).output_text(),
            r#"{"ok":true}"#
        );
    }
}
