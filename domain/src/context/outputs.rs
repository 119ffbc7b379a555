//! Correlating command results with the tool calls that requested them.
//!
//! After commands run, the host stores their results as the next turn's
//! input: a JSON array of `{"request": {"cmd": ...}, "result": ...}`
//! records. Providers with native tool calling need one output per
//! `tool_call_id`, so results are matched back by command name.

use crate::context::entities::ToolOutput;
use crate::tool_call::entities::NativeToolCall;
use serde_json::{Map, Value};

/// Outputs for each tool call plus, if `input` was unusable, the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedOutputs {
    /// One entry per tool call, in tool call order
    pub outputs: Vec<ToolOutput>,
    /// Why `input` could not be read; every output is `""` when set
    pub input_error: Option<String>,
}

/// Match results in `input` to `tool_calls` by command name.
///
/// When several results share a command name the last one wins. Calls
/// without a result get `""`. An `input` that is missing, not JSON, or not an
/// array yields `""` for every call.
pub fn correlate_outputs(tool_calls: &[NativeToolCall], input: Option<&str>) -> CorrelatedOutputs {
    let (results, input_error) = match index_results(input) {
        Ok(results) => (results, None),
        Err(reason) => (Map::new(), Some(reason)),
    };

    let outputs = tool_calls
        .iter()
        .map(|call| match results.get(call.name()) {
            Some(result) => ToolOutput::new(call.id.clone(), result.clone()),
            None => ToolOutput::empty(call.id.clone()),
        })
        .collect();

    CorrelatedOutputs {
        outputs,
        input_error,
    }
}

fn index_results(input: Option<&str>) -> Result<Map<String, Value>, String> {
    let input = input.ok_or_else(|| "input is empty".to_string())?;
    let parsed: Value = serde_json::from_str(input).map_err(|e| e.to_string())?;
    let Value::Array(records) = parsed else {
        return Err("input is not a JSON array".to_string());
    };

    let mut results = Map::new();
    for record in records {
        let cmd = record
            .get("request")
            .and_then(|r| r.get("cmd"))
            .and_then(Value::as_str);
        if let (Some(cmd), Some(result)) = (cmd, record.get("result")) {
            results.insert(cmd.to_string(), result.clone());
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::entities::Params;
    use serde_json::json;

    fn call(id: &str, name: &str) -> NativeToolCall {
        NativeToolCall::new(id, name, Params::new())
    }

    #[test]
    fn test_last_match_wins() {
        let input = r#"[{"request":{"cmd":"foo"},"result":"A"},{"request":{"cmd":"foo"},"result":"B"}]"#;
        let correlated = correlate_outputs(&[call("1", "foo")], Some(input));
        assert_eq!(correlated.outputs, vec![ToolOutput::new("1", "B")]);
        assert!(correlated.input_error.is_none());
    }

    #[test]
    fn test_unmatched_calls_get_empty_output_in_call_order() {
        let input = r#"[{"request":{"cmd":"bar"},"result":{"rows":2}},{"result":"orphan"},{"request":{}}]"#;
        let correlated = correlate_outputs(&[call("1", "foo"), call("2", "bar")], Some(input));
        assert_eq!(
            correlated.outputs,
            vec![
                ToolOutput::empty("1"),
                ToolOutput::new("2", json!({"rows": 2})),
            ]
        );
    }

    #[test]
    fn test_invalid_input_degrades_to_empty_outputs() {
        for input in [None, Some("not json"), Some(r#"{"request":{"cmd":"foo"}}"#)] {
            let correlated = correlate_outputs(&[call("1", "foo"), call("2", "bar")], input);
            assert_eq!(
                correlated.outputs,
                vec![ToolOutput::empty("1"), ToolOutput::empty("2")]
            );
            assert!(correlated.input_error.is_some());
        }
    }

    #[test]
    fn test_no_tool_calls() {
        let correlated = correlate_outputs(&[], Some("[]"));
        assert!(correlated.outputs.is_empty());
    }
}
