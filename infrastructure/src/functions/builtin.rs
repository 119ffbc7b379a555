//! Built-in function source.
//!
//! - `goal_update`: lets the legacy agent report progress on its goal
//! - `expert_call`: lets a parent conversation delegate to an expert preset
//! - user functions: the `[[functions]]` tables, passed through unchanged

use crate::config::{FileConfig, FileExpertPreset};
use cmdlayer_application::ports::function_source::FunctionSource;
use cmdlayer_domain::command::schema::build_function_schema;
use cmdlayer_domain::{CommandDescriptor, FunctionSchema, Param};
use serde_json::{Value, json};

pub const GOAL_UPDATE: &str = "goal_update";
pub const EXPERT_CALL: &str = "expert_call";

/// Values of `goal_update.status`
pub const GOAL_STATUSES: &[&str] = &["continue", "pause", "finished"];

/// [`FunctionSource`] for the agent and expert functions plus the user's
/// configured functions.
#[derive(Debug, Clone, Default)]
pub struct BuiltinFunctionSource {
    presets: Vec<FileExpertPreset>,
    user_functions: Vec<FunctionSchema>,
}

impl BuiltinFunctionSource {
    pub fn new(presets: Vec<FileExpertPreset>, user_functions: Vec<FunctionSchema>) -> Self {
        Self {
            presets,
            user_functions,
        }
    }

    pub fn from_config(config: &FileConfig) -> Self {
        Self::new(config.experts.presets.clone(), config.functions.clone())
    }

    fn goal_update() -> CommandDescriptor {
        CommandDescriptor::new(
            GOAL_UPDATE,
            "Update the status of the current goal. Call with \"finished\" once the goal is reached.",
        )
        .with_param(
            Param::new("status", "New goal status", true)
                .with_enum(json!({ "status": GOAL_STATUSES })),
        )
    }

    fn expert_call(&self) -> CommandDescriptor {
        let ids: Vec<Value> = self
            .presets
            .iter()
            .map(|p| Value::from(p.id.as_str()))
            .collect();
        CommandDescriptor::new(
            EXPERT_CALL,
            "Ask an expert to handle a query and return its answer.",
        )
        .with_param(Param::new("id", "Expert ID", true).with_enum(json!({ "id": ids })))
        .with_param(Param::new("query", "Query for the expert", true))
    }
}

impl FunctionSource for BuiltinFunctionSource {
    fn agent_functions(&self) -> Vec<FunctionSchema> {
        vec![build_function_schema(&Self::goal_update())]
    }

    fn expert_functions(&self) -> Vec<FunctionSchema> {
        if self.presets.is_empty() {
            return Vec::new();
        }
        vec![build_function_schema(&self.expert_call())]
    }

    fn user_functions(&self) -> Vec<FunctionSchema> {
        self.user_functions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: &str) -> FileExpertPreset {
        FileExpertPreset {
            id: id.to_string(),
            name: id.to_uppercase(),
        }
    }

    #[test]
    fn test_goal_update_schema() {
        let functions = BuiltinFunctionSource::default().agent_functions();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, GOAL_UPDATE);
        assert_eq!(
            functions[0].params["properties"]["status"]["enum"],
            json!(["continue", "pause", "finished"])
        );
        assert_eq!(functions[0].params["required"], json!(["status"]));
    }

    #[test]
    fn test_expert_call_lists_presets() {
        let source = BuiltinFunctionSource::new(vec![preset("coder"), preset("translator")], vec![]);
        let functions = source.expert_functions();
        assert_eq!(functions[0].name, EXPERT_CALL);
        assert_eq!(
            functions[0].params["properties"]["id"]["enum"],
            json!(["coder", "translator"])
        );
        assert_eq!(functions[0].params["required"], json!(["id", "query"]));
    }

    #[test]
    fn test_no_presets_no_expert_call() {
        assert!(BuiltinFunctionSource::default().expert_functions().is_empty());
    }

    #[test]
    fn test_user_functions_from_config() {
        let config: FileConfig = toml::from_str(
            r#"
[[functions]]
name = "lookup"
desc = "Look up"
"#,
        )
        .unwrap();
        let source = BuiltinFunctionSource::from_config(&config);
        let functions = source.user_functions();
        assert_eq!(functions[0].name, "lookup");
        assert_eq!(functions[0].params["type"], "object");
    }
}
