//! Command domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Argument values of a command, keyed by parameter name.
pub type Params = Map<String, Value>;

/// Declared type of a command parameter.
///
/// Unknown type names deserialize as [`ParamType::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    Str,
    Int,
    Float,
    Bool,
    Dict,
    List,
    Enum,
    Text,
    #[serde(other)]
    Any,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Str => "str",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Bool => "bool",
            ParamType::Dict => "dict",
            ParamType::List => "list",
            ParamType::Enum => "enum",
            ParamType::Text => "text",
            ParamType::Any => "any",
        }
    }

    /// JSON-Schema type used for native function calling.
    pub fn json_schema_type(&self) -> &'static str {
        match self {
            ParamType::Str | ParamType::Enum | ParamType::Text | ParamType::Any => "string",
            ParamType::Int => "integer",
            ParamType::Bool => "boolean",
            ParamType::Dict => "object",
            ParamType::Float => "number",
            ParamType::List => "array",
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter specification for a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name, unique within a descriptor
    pub name: String,
    /// Declared type
    #[serde(rename = "type", default)]
    pub param_type: ParamType,
    /// Human-readable description; `None` when the plugin left it out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this parameter is required
    #[serde(default)]
    pub required: bool,
    /// Default value shown to the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values: a list, or a mapping whose keys (or nested keys) are the values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Value>,
}

impl Param {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Str,
            description: Some(description.into()),
            required,
            default: None,
            enum_values: None,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_enum(mut self, values: impl Into<Value>) -> Self {
        self.enum_values = Some(values.into());
        self
    }

    /// Description text, empty when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Definition of a command a plugin makes available to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Unique command name (e.g., "read_file")
    pub cmd: String,
    /// Help text shown to the model; `None` when the plugin left it out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    /// Parameter specifications
    #[serde(default)]
    pub params: Vec<Param>,
}

impl CommandDescriptor {
    pub fn new(cmd: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            instruction: Some(instruction.into()),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Instruction text, empty when absent.
    pub fn instruction(&self) -> &str {
        self.instruction.as_deref().unwrap_or_default()
    }

    /// Names of parameters marked as required, in declaration order.
    pub fn required_params(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }
}

/// A concrete command to execute: name plus argument values.
///
/// This is the canonical form every other representation converts to and
/// from. `id` is only set when the invocation came from a native tool call
/// and must be echoed back with its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandInvocation {
    /// Command name
    pub cmd: String,
    /// Arguments passed to the command
    #[serde(default)]
    pub params: Params,
    /// Provider-assigned tool call ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CommandInvocation {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            params: Params::new(),
            id: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Drop the provider ID, leaving only `{cmd, params}`.
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_param_type_mapping() {
        assert_eq!(ParamType::Str.json_schema_type(), "string");
        assert_eq!(ParamType::Enum.json_schema_type(), "string");
        assert_eq!(ParamType::Text.json_schema_type(), "string");
        assert_eq!(ParamType::Any.json_schema_type(), "string");
        assert_eq!(ParamType::Int.json_schema_type(), "integer");
        assert_eq!(ParamType::Bool.json_schema_type(), "boolean");
        assert_eq!(ParamType::Dict.json_schema_type(), "object");
        assert_eq!(ParamType::Float.json_schema_type(), "number");
        assert_eq!(ParamType::List.json_schema_type(), "array");
    }

    #[test]
    fn test_param_defaults_on_deserialize() {
        let param: Param = serde_json::from_value(json!({"name": "path"})).unwrap();
        assert_eq!(param.param_type, ParamType::Str);
        assert!(param.description.is_none());
        assert_eq!(param.description(), "");
        assert!(!param.required);
        assert!(param.default.is_none());
        assert!(param.enum_values.is_none());
    }

    #[test]
    fn test_unknown_param_type_is_any() {
        let param: Param =
            serde_json::from_value(json!({"name": "x", "type": "datetime"})).unwrap();
        assert_eq!(param.param_type, ParamType::Any);
    }

    #[test]
    fn test_descriptor_from_plugin_json() {
        let descriptor: CommandDescriptor = serde_json::from_value(json!({
            "cmd": "read_file",
            "instruction": "Read file contents",
            "params": [
                {"name": "path", "type": "list", "description": "paths", "required": true},
                {"name": "encoding", "description": "encoding", "required": false, "default": "utf-8"}
            ]
        }))
        .unwrap();

        assert_eq!(descriptor.cmd, "read_file");
        assert_eq!(descriptor.instruction(), "Read file contents");
        assert_eq!(descriptor.params.len(), 2);
        assert_eq!(descriptor.params[0].param_type, ParamType::List);
        assert_eq!(descriptor.params[1].default, Some(json!("utf-8")));
        assert_eq!(descriptor.required_params().collect::<Vec<_>>(), vec!["path"]);
    }

    #[test]
    fn test_missing_instruction_differs_from_empty() {
        let missing: CommandDescriptor = serde_json::from_value(json!({"cmd": "ping"})).unwrap();
        assert!(missing.instruction.is_none());
        assert_eq!(missing.instruction(), "");

        let empty = CommandDescriptor::new("ping", "");
        assert_eq!(empty.instruction.as_deref(), Some(""));
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            json!({"cmd": "ping", "instruction": "", "params": []})
        );
    }

    #[test]
    fn test_invocation_serializes_without_id() {
        let invocation = CommandInvocation::new("read_file").with_param("path", "a.txt");
        let json = serde_json::to_string(&invocation).unwrap();
        assert_eq!(json, r#"{"cmd":"read_file","params":{"path":"a.txt"}}"#);

        let with_id = invocation.clone().with_id("call_1");
        assert_eq!(with_id.id.as_deref(), Some("call_1"));
        assert_eq!(with_id.without_id(), invocation);
    }

    #[test]
    fn test_invocation_accessors() {
        let invocation = CommandInvocation::new("read_file").with_param("path", "a.txt");
        assert_eq!(invocation.get_string("path"), Some("a.txt"));
        assert_eq!(invocation.get_string("missing"), None);
    }
}
