//! Console output formatter for command layer results

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use cmdlayer_domain::{
    CommandInvocation, Conversion, FunctionSchema, NativeToolCall, SyntaxBlock, ToolOutput,
};
use serde::Serialize;
use serde_json::{Value, json};

/// Formats command layer results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format extracted or decoded invocations
    pub fn invocations(invocations: &[CommandInvocation], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(&invocations),
            OutputFormat::Pretty => {
                if invocations.is_empty() {
                    return format!("{}", "No commands found".dimmed());
                }
                let mut output = Self::header(&format!("Commands ({})", invocations.len()));
                for invocation in invocations {
                    output.push_str(&Self::call_line(
                        &invocation.cmd,
                        invocation.id.as_deref(),
                        &Value::Object(invocation.params.clone()),
                    ));
                }
                output
            }
        }
    }

    /// Format a syntax block: the prompt text, or its structure as JSON
    pub fn syntax_block(block: &SyntaxBlock, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(&block.structure),
            OutputFormat::Pretty => block.text.clone(),
        }
    }

    /// Format function schemas, optionally as OpenAI `tools[]` entries
    pub fn functions(functions: &[FunctionSchema], format: OutputFormat, openai: bool) -> String {
        if openai {
            let tools: Vec<Value> = functions.iter().map(|f| f.to_openai_tool()).collect();
            return Self::json(&tools);
        }
        match format {
            OutputFormat::Json => Self::json(&functions),
            OutputFormat::Pretty => {
                if functions.is_empty() {
                    return format!("{}", "No functions".dimmed());
                }
                let mut output = Self::header(&format!("Functions ({})", functions.len()));
                for function in functions {
                    output.push_str(&format!("  {} {}\n", "●".cyan(), function.name.bold()));
                    if !function.desc.is_empty() {
                        output.push_str(&format!("{}\n", Self::indent(&function.desc, "      ")));
                    }
                    let required = function.params["required"]
                        .as_array()
                        .map(|r| r.iter().filter_map(Value::as_str).collect::<Vec<_>>())
                        .unwrap_or_default();
                    if let Some(properties) = function.params["properties"].as_object() {
                        for (name, property) in properties {
                            let marker = if required.contains(&name.as_str()) {
                                "*".red().to_string()
                            } else {
                                " ".to_string()
                            };
                            output.push_str(&format!(
                                "      {}{} {}\n",
                                marker,
                                name.yellow(),
                                property["type"].as_str().unwrap_or("any").dimmed()
                            ));
                        }
                    }
                }
                output
            }
        }
    }

    /// Format converted tool calls together with the dropped items
    pub fn tool_calls(conversion: &Conversion<NativeToolCall>, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                let dropped: Vec<Value> = conversion
                    .dropped
                    .iter()
                    .map(|d| json!({"index": d.index, "error": d.error.to_string()}))
                    .collect();
                Self::json(&json!({
                    "tool_calls": conversion.items,
                    "dropped": dropped,
                }))
            }
            OutputFormat::Pretty => {
                let mut output = Self::header(&format!("Tool calls ({})", conversion.items.len()));
                for call in &conversion.items {
                    let id = (!call.id.is_empty()).then_some(call.id.as_str());
                    output.push_str(&Self::call_line(
                        call.name(),
                        id,
                        &Value::Object(call.function.arguments.clone()),
                    ));
                }
                for dropped in &conversion.dropped {
                    let line = format!("  ✗ {}", dropped);
                    if dropped.error.is_shape_mismatch() {
                        output.push_str(&format!("{}\n", line.dimmed()));
                    } else {
                        output.push_str(&format!("{}\n", line.red()));
                    }
                }
                output
            }
        }
    }

    /// Format outputs correlated for a provider reply
    pub fn tool_outputs(outputs: &[ToolOutput], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(&outputs),
            OutputFormat::Pretty => {
                let mut output = Self::header(&format!("Tool outputs ({})", outputs.len()));
                for item in outputs {
                    let text = item.output_text();
                    let text = if text.is_empty() {
                        "(no result)".dimmed().to_string()
                    } else {
                        text
                    };
                    output.push_str(&format!("  {} {}\n", item.tool_call_id.cyan(), text));
                }
                output
            }
        }
    }

    /// Format a yes/no answer
    pub fn flag(label: &str, value: bool, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(&json!({ label: value })),
            OutputFormat::Pretty => {
                let answer = if value { "yes".green() } else { "no".red() };
                format!("{} {}", format!("{}:", label).cyan().bold(), answer)
            }
        }
    }

    /// Pretty-printed JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    }

    fn header(title: &str) -> String {
        format!("{}\n", title.cyan().bold())
    }

    fn call_line(name: &str, id: Option<&str>, params: &Value) -> String {
        let id = id
            .map(|id| format!(" [{}]", id).dimmed().to_string())
            .unwrap_or_default();
        format!("  {} {}{} {}\n", "●".green(), name.bold(), id, params)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdlayer_domain::{Diagnostic, ToolCallError};

    #[test]
    fn test_invocations_json() {
        let invocations = vec![CommandInvocation::new("ls").with_param("path", ".")];
        let output = ConsoleFormatter::invocations(&invocations, OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, json!([{"cmd": "ls", "params": {"path": "."}}]));
    }

    #[test]
    fn test_invocations_pretty_empty() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::invocations(&[], OutputFormat::Pretty),
            "No commands found"
        );
    }

    #[test]
    fn test_tool_calls_json_includes_dropped() {
        let conversion = Conversion {
            items: vec![NativeToolCall::new("1", "ls", Default::default())],
            dropped: vec![Diagnostic {
                index: 1,
                error: ToolCallError::ArgumentsNotObject {
                    name: "cat".to_string(),
                },
            }],
        };
        let output = ConsoleFormatter::tool_calls(&conversion, OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["tool_calls"][0]["function"]["name"], "ls");
        assert_eq!(parsed["dropped"][0]["index"], 1);
    }

    #[test]
    fn test_flag() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::flag("native", true, OutputFormat::Pretty),
            "native: yes"
        );
        assert_eq!(
            ConsoleFormatter::flag("native", false, OutputFormat::Json),
            "{\n  \"native\": false\n}"
        );
    }

    #[test]
    fn test_openai_functions() {
        let functions = vec![FunctionSchema::new(
            "ls",
            "List",
            cmdlayer_domain::command::schema::empty_params_schema(),
        )];
        let output = ConsoleFormatter::functions(&functions, OutputFormat::Pretty, true);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["function"]["parameters"]["type"], "object");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
