//! Compact command syntax block for system prompts.
//!
//! When commands are offered through the prompt instead of native tool
//! calling, the model needs a description of every command. This block is
//! the cheapest faithful rendering: one line of JSON keyed by command name,
//! with `str` types and `required: false` markers elided.

use crate::command::entities::{CommandDescriptor, Param, ParamType};
use serde_json::{Map, Value};

/// Result of [`build_syntax_block`]: the prompt text plus the structure it
/// was serialized from, for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxBlock {
    /// Single-line JSON inserted into the prompt
    pub text: String,
    /// The structure `text` was rendered from
    pub structure: Value,
}

/// Build the syntax block for a list of command descriptors.
///
/// Descriptors without an `instruction` (or with an empty `cmd`) are
/// skipped; an empty instruction still yields an entry. A later descriptor
/// with the same `cmd` replaces an earlier one.
pub fn build_syntax_block(descriptors: &[CommandDescriptor]) -> SyntaxBlock {
    let mut commands = Map::new();

    for descriptor in descriptors {
        let Some(instruction) = &descriptor.instruction else {
            continue;
        };
        if descriptor.cmd.is_empty() {
            continue;
        }

        let mut entry = Map::new();
        entry.insert("help".to_string(), Value::String(instruction.clone()));

        if !descriptor.params.is_empty() {
            let params: Map<String, Value> = descriptor
                .params
                .iter()
                .map(|p| (p.name.clone(), Value::Object(syntax_param(p))))
                .collect();
            entry.insert("params".to_string(), Value::Object(params));
        }

        commands.insert(descriptor.cmd.clone(), Value::Object(entry));
    }

    let structure = Value::Object(commands);
    SyntaxBlock {
        text: structure.to_string(),
        structure,
    }
}

fn syntax_param(param: &Param) -> Map<String, Value> {
    let mut entry = Map::new();

    // str is the implicit default
    if param.param_type != ParamType::Str {
        entry.insert(
            "type".to_string(),
            Value::String(param.param_type.as_str().to_string()),
        );
    }
    if let Some(description) = &param.description {
        entry.insert("help".to_string(), Value::String(description.clone()));
    }
    if param.required {
        entry.insert("required".to_string(), Value::Bool(true));
    } else {
        entry.insert("optional".to_string(), Value::Bool(true));
    }
    if let Some(default) = &param.default {
        entry.insert("default".to_string(), default.clone());
    }
    if let Some(values) = &param.enum_values {
        entry.insert("enum".to_string(), values.clone());
    }

    entry
}
