//! Native function-calling schema for command descriptors.
//!
//! Converts a [`CommandDescriptor`] into the `{name, desc, params}` function
//! definition sent to providers that support native tool calling. `params`
//! is a strict JSON-Schema object: unknown properties are rejected and the
//! base keys are always present, even for commands without parameters.

use crate::command::entities::{CommandDescriptor, Param, ParamType};
use crate::core::error::SchemaError;
use crate::util::truncate_chars;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashSet;

/// Maximum length (in characters) of function and parameter descriptions.
pub const MAX_DESCRIPTION_CHARS: usize = 1024;

/// Function definition in the form expected by native tool-calling APIs.
///
/// On the wire `params` is the JSON-Schema object serialized as a JSON
/// string; both that form and an inline object are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    /// Function (command) name
    pub name: String,
    /// Description, at most [`MAX_DESCRIPTION_CHARS`] characters
    #[serde(default)]
    pub desc: String,
    /// JSON-Schema object describing the arguments
    #[serde(with = "json_string", default = "empty_params_schema")]
    pub params: Value,
}

impl FunctionSchema {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            params,
        }
    }

    /// Render as an OpenAI-style `tools[]` entry.
    pub fn to_openai_tool(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.desc,
                "parameters": self.params,
            }
        })
    }
}

/// A parameter left out of a function schema, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamIssue {
    /// Command the parameter belongs to
    pub cmd: String,
    /// Parameter name as declared (may be empty)
    pub param: String,
    pub error: SchemaError,
}

impl std::fmt::Display for ParamIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.cmd, self.param, self.error)
    }
}

/// JSON-Schema parameters object plus any parameters that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaBuild {
    pub schema: Value,
    pub issues: Vec<ParamIssue>,
}

/// The empty parameters object: `{type, properties, required, additionalProperties}`.
pub fn empty_params_schema() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "required": [],
        "additionalProperties": false,
    })
}

/// Build the function schema for a descriptor, discarding issues.
pub fn build_function_schema(descriptor: &CommandDescriptor) -> FunctionSchema {
    build_function_schema_with_issues(descriptor).0
}

/// Build the function schema for a descriptor, reporting skipped parameters.
pub fn build_function_schema_with_issues(
    descriptor: &CommandDescriptor,
) -> (FunctionSchema, Vec<ParamIssue>) {
    let SchemaBuild { schema, issues } = build_params_schema(descriptor);
    let function = FunctionSchema::new(
        descriptor.cmd.clone(),
        truncate_chars(descriptor.instruction(), MAX_DESCRIPTION_CHARS),
        schema,
    );
    (function, issues)
}

/// Build the JSON-Schema parameters object for a descriptor.
pub fn params_to_json_schema(descriptor: &CommandDescriptor) -> Value {
    build_params_schema(descriptor).schema
}

/// Build the JSON-Schema parameters object, reporting skipped parameters.
///
/// A parameter that cannot be rendered is left out of `properties`; the
/// rest of the schema is still produced.
pub fn build_params_schema(descriptor: &CommandDescriptor) -> SchemaBuild {
    let mut required: Vec<Value> = Vec::new();
    for name in descriptor.required_params() {
        if !name.is_empty() && !required.iter().any(|r| r == name) {
            required.push(Value::String(name.to_string()));
        }
    }

    let mut properties = Map::new();
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for param in &descriptor.params {
        match param_property(param, &seen) {
            Ok(property) => {
                seen.insert(param.name.as_str());
                properties.insert(param.name.clone(), Value::Object(property));
            }
            Err(error) => issues.push(ParamIssue {
                cmd: descriptor.cmd.clone(),
                param: param.name.clone(),
                error,
            }),
        }
    }

    SchemaBuild {
        schema: json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        }),
        issues,
    }
}

fn param_property(param: &Param, seen: &HashSet<&str>) -> Result<Map<String, Value>, SchemaError> {
    if param.name.is_empty() {
        return Err(SchemaError::EmptyParamName);
    }
    if seen.contains(param.name.as_str()) {
        return Err(SchemaError::DuplicateParam(param.name.clone()));
    }

    let mut property = Map::new();
    property.insert(
        "type".to_string(),
        Value::String(param.param_type.json_schema_type().to_string()),
    );

    let mut description = truncate_chars(param.description(), MAX_DESCRIPTION_CHARS).to_string();
    let mut allowed = None;

    // The unbalanced ")" in both suffixes matches prompts already in use
    if let Some(values) = &param.enum_values {
        description.push_str(&format!(", enum: {})", values));
        allowed = enum_candidates(&param.name, values);
    }
    if let Some(default) = &param.default {
        description.push_str(&format!(", default: {})", render_default(default)));
    }

    property.insert("description".to_string(), Value::String(description));
    if let Some(values) = allowed {
        property.insert("enum".to_string(), Value::Array(values));
    }
    if param.param_type == ParamType::List {
        property.insert("items".to_string(), json!({"type": "string"}));
    }

    Ok(property)
}

/// Allowed values for an `enum` declaration.
///
/// The candidates come from the entry keyed by the parameter's own name. A
/// list there is used as-is. For a mapping the keys are the candidates,
/// unless a value is itself a mapping or list: then that nested
/// collection's keys or elements replace them (the last nested one wins).
/// A bare list in place of the whole declaration is also accepted.
fn enum_candidates(name: &str, values: &Value) -> Option<Vec<Value>> {
    let source = match values {
        Value::Array(items) => return Some(items.clone()),
        Value::Object(map) => map.get(name)?,
        _ => return None,
    };
    match source {
        Value::Array(items) => Some(items.clone()),
        Value::Object(map) => {
            let mut candidates: Vec<Value> = map.keys().cloned().map(Value::String).collect();
            for nested in map.values() {
                match nested {
                    Value::Object(sub) => {
                        candidates = sub.keys().cloned().map(Value::String).collect();
                    }
                    Value::Array(items) => candidates = items.clone(),
                    _ => {}
                }
            }
            Some(candidates)
        }
        _ => None,
    }
}

fn render_default(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

mod json_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Inline(Value),
    }

    pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => serde_json::from_str(&text).map_err(D::Error::custom),
            Raw::Inline(value) => Ok(value),
        }
    }
}
