//! Tool call adapter use case.
//!
//! Converts provider tool calls into [`NativeToolCall`]s and moves them
//! through a [`ContextItem`]: finalizing streamed calls, rendering them as
//! marker text for consumers that only read text, and correlating command
//! results for the provider reply.
//!
//! Malformed items are logged and dropped; no operation here fails.

use cmdlayer_domain::command::marker;
use cmdlayer_domain::context::{
    EXTRA_TOOL_CALLS, EXTRA_TOOL_CALLS_OUTPUTS, EXTRA_TOOL_OUTPUT, correlate_outputs,
};
use cmdlayer_domain::tool_call::conversion;
use cmdlayer_domain::{
    AgentToolCall, ChatCompletionsToolCall, CommandInvocation, ContextItem, Conversion,
    NativeToolCall, ProviderToolCall, ResponsesApiToolCall, ToolOutput,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Stateless adapter between provider tool calls, context items and
/// command invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolCallAdapter;

impl ToolCallAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Convert Chat Completions tool calls; unparseable ones are logged and skipped.
    pub fn from_chat_completions(
        &self,
        calls: &[ChatCompletionsToolCall],
    ) -> Conversion<NativeToolCall> {
        report("chat_completions", conversion::from_chat_completions(calls))
    }

    /// Convert Responses API output items; items that are not function calls
    /// are skipped without logging.
    pub fn from_responses_api(&self, items: &[ResponsesApiToolCall]) -> Conversion<NativeToolCall> {
        report("responses_api", conversion::from_responses_api(items))
    }

    /// Convert agent framework tool calls.
    pub fn from_agent_tool_calls(&self, calls: &[AgentToolCall]) -> Conversion<NativeToolCall> {
        report("agent", conversion::from_agent_tool_calls(calls))
    }

    /// Convert a mixed batch of provider tool calls.
    pub fn unpack(&self, calls: &[ProviderToolCall]) -> Conversion<NativeToolCall> {
        report("provider", conversion::unpack(calls))
    }

    /// Finalize tool calls accumulated while streaming.
    ///
    /// The accepted calls replace `ctx.tool_calls`. With `append_output`,
    /// they are also mirrored into `ctx.extra` together with an empty output
    /// accumulator.
    pub fn normalize_streamed_chunks(
        &self,
        ctx: &mut ContextItem,
        raw_tool_calls: &[Value],
        append_output: bool,
    ) -> Conversion<NativeToolCall> {
        let conversion = report("stream", conversion::from_streamed_chunks(raw_tool_calls));
        ctx.tool_calls = conversion.items.clone();

        if append_output {
            let calls = serde_json::to_value(&ctx.tool_calls).unwrap_or_else(|e| {
                warn!("Could not mirror tool calls into context extra: {}", e);
                Value::Array(Vec::new())
            });
            ctx.extra.insert(EXTRA_TOOL_CALLS.to_string(), calls);
            ctx.extra
                .insert(EXTRA_TOOL_OUTPUT.to_string(), Value::Array(Vec::new()));
        }
        conversion
    }

    /// `{cmd, params}` → native tool call.
    pub fn invocation_to_tool_call(&self, invocation: &CommandInvocation) -> NativeToolCall {
        conversion::invocation_to_tool_call(invocation)
    }

    /// Native tool call → `{cmd, params}` (keeping the id).
    pub fn tool_call_to_invocation(&self, tool_call: &NativeToolCall) -> CommandInvocation {
        conversion::tool_call_to_invocation(tool_call)
    }

    /// Append `ctx.tool_calls` to `ctx.output` as marker text.
    ///
    /// Provider ids are not written into the text.
    pub fn append_as_marker_text(&self, ctx: &mut ContextItem) {
        let invocations: Vec<CommandInvocation> = ctx
            .tool_calls
            .iter()
            .map(|call| call.to_invocation().without_id())
            .collect();
        let encoded = marker::encode_all(&invocations);
        ctx.output.get_or_insert_with(String::new).push_str(&encoded);
    }

    /// Correlate command results in `ctx.input` with `ctx.tool_calls`.
    ///
    /// Returns one output per tool call in call order (last matching result
    /// wins, `""` when none), and stores the same list in
    /// `ctx.extra["tool_calls_outputs"]`.
    pub fn extract_tool_outputs_for_reply(&self, ctx: &mut ContextItem) -> Vec<ToolOutput> {
        let correlated = correlate_outputs(&ctx.tool_calls, ctx.input.as_deref());
        if let Some(reason) = &correlated.input_error {
            debug!("Tool results unavailable, replying with empty outputs: {}", reason);
        }

        let stored = serde_json::to_value(&correlated.outputs).unwrap_or_else(|e| {
            warn!("Could not store tool outputs in context extra: {}", e);
            Value::Array(Vec::new())
        });
        ctx.extra.insert(EXTRA_TOOL_CALLS_OUTPUTS.to_string(), stored);
        correlated.outputs
    }
}

/// Log dropped items: malformed data at `warn`, expected shape differences
/// at `trace`.
fn report(source: &str, conversion: Conversion<NativeToolCall>) -> Conversion<NativeToolCall> {
    for dropped in &conversion.dropped {
        if dropped.error.is_shape_mismatch() {
            tracing::trace!(source, "Skipping tool call: {}", dropped);
        } else {
            warn!(source, "Dropping tool call: {}", dropped);
        }
    }
    debug!(
        source,
        accepted = conversion.items.len(),
        dropped = conversion.dropped.len(),
        "Converted tool calls"
    );
    conversion
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdlayer_domain::{Params, RawFunctionCall};
    use serde_json::json;

    fn params(value: Value) -> Params {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_normalize_streamed_chunks_replaces_tool_calls() {
        let adapter = ToolCallAdapter::new();
        let mut ctx = ContextItem::new().with_tool_calls(vec![NativeToolCall::new(
            "old",
            "stale",
            Params::new(),
        )]);
        let raw = vec![
            json!({"id": "1", "type": "function", "function": {"name": "a", "arguments": "{\"x\":1}"}}),
            json!({"id": "2", "function": {"name": "b", "arguments": "{bad"}}),
        ];

        let conversion = adapter.normalize_streamed_chunks(&mut ctx, &raw, false);
        assert_eq!(conversion.dropped.len(), 1);
        assert_eq!(ctx.tool_calls.len(), 1);
        assert_eq!(ctx.tool_calls[0].id, "1");
        assert!(ctx.extra.is_empty());
    }

    #[test]
    fn test_normalize_streamed_chunks_mirrors_into_extra() {
        let adapter = ToolCallAdapter::new();
        let mut ctx = ContextItem::new();
        let raw = vec![json!({"id": "1", "function": {"name": "a", "arguments": "{}"}})];

        adapter.normalize_streamed_chunks(&mut ctx, &raw, true);
        assert_eq!(
            ctx.extra[EXTRA_TOOL_CALLS],
            json!([{"id": "1", "type": "function", "function": {"name": "a", "arguments": {}}}])
        );
        assert_eq!(ctx.extra[EXTRA_TOOL_OUTPUT], json!([]));
    }

    #[test]
    fn test_append_as_marker_text() {
        let adapter = ToolCallAdapter::new();
        let mut ctx = ContextItem::new().with_tool_calls(vec![
            NativeToolCall::new("1", "read_file", params(json!({"path": "a.txt"}))),
            NativeToolCall::new("2", "get_time", Params::new()),
        ]);

        adapter.append_as_marker_text(&mut ctx);
        assert_eq!(
            ctx.output.as_deref(),
            Some(
                r#"<tool>{"cmd":"read_file","params":{"path":"a.txt"}}</tool><tool>{"cmd":"get_time","params":{}}</tool>"#
            )
        );

        // Appends to existing output and round-trips through the codec
        let mut ctx = ContextItem::new()
            .with_output("Reading. ")
            .with_tool_calls(vec![NativeToolCall::new("1", "ls", Params::new())]);
        adapter.append_as_marker_text(&mut ctx);
        let output = ctx.output.unwrap();
        assert!(output.starts_with("Reading. <tool>"));
        assert_eq!(marker::extract_all(&output), vec![CommandInvocation::new("ls")]);
    }

    #[test]
    fn test_append_without_tool_calls_initializes_output() {
        let mut ctx = ContextItem::new();
        ToolCallAdapter::new().append_as_marker_text(&mut ctx);
        assert_eq!(ctx.output.as_deref(), Some(""));
    }

    #[test]
    fn test_extract_tool_outputs_last_match_wins_and_persists() {
        let adapter = ToolCallAdapter::new();
        let mut ctx = ContextItem::new()
            .with_input(r#"[{"request":{"cmd":"foo"},"result":"A"},{"request":{"cmd":"foo"},"result":"B"}]"#)
            .with_tool_calls(vec![NativeToolCall::new("1", "foo", Params::new())]);

        let outputs = adapter.extract_tool_outputs_for_reply(&mut ctx);
        assert_eq!(outputs, vec![ToolOutput::new("1", "B")]);
        assert_eq!(
            ctx.extra[EXTRA_TOOL_CALLS_OUTPUTS],
            json!([{"tool_call_id": "1", "output": "B"}])
        );
    }

    #[test]
    fn test_extract_tool_outputs_with_invalid_input() {
        let adapter = ToolCallAdapter::new();
        let mut ctx = ContextItem::new()
            .with_input("this is not json")
            .with_tool_calls(vec![
                NativeToolCall::new("1", "foo", Params::new()),
                NativeToolCall::new("2", "bar", Params::new()),
            ]);

        let outputs = adapter.extract_tool_outputs_for_reply(&mut ctx);
        assert_eq!(outputs, vec![ToolOutput::empty("1"), ToolOutput::empty("2")]);
        assert_eq!(
            ctx.extra[EXTRA_TOOL_CALLS_OUTPUTS],
            json!([{"tool_call_id": "1", "output": ""}, {"tool_call_id": "2", "output": ""}])
        );
    }

    #[test]
    fn test_chat_completions_then_invocations() {
        let adapter = ToolCallAdapter::new();
        let calls = vec![ChatCompletionsToolCall {
            id: "call_1".to_string(),
            call_type: "function".to_string(),
            function: RawFunctionCall {
                name: "read_file".to_string(),
                arguments: r#"{"path":"a.txt"}"#.to_string(),
            },
        }];
        let conversion = adapter.from_chat_completions(&calls);
        let invocation = adapter.tool_call_to_invocation(&conversion.items[0]);
        assert_eq!(invocation.id.as_deref(), Some("call_1"));
        assert_eq!(invocation.get_string("path"), Some("a.txt"));
        assert_eq!(adapter.invocation_to_tool_call(&invocation), conversion.items[0]);
    }
}
