//! Model capabilities from TOML (`[[models]]` tables)

use cmdlayer_domain::ModelInfo;

/// Raw model entry from TOML
///
/// # Example
///
/// ```toml
/// [[models]]
/// id = "gpt-4o"
/// tool_calls = true
/// modes = ["chat", "agent", "expert"]   # empty or missing: every mode
/// ```
pub type FileModelConfig = ModelInfo;

/// Find a model entry by ID.
pub fn find_model<'a>(models: &'a [FileModelConfig], id: &str) -> Option<&'a FileModelConfig> {
    models.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;
    use cmdlayer_domain::Mode;

    #[test]
    fn test_models_deserialize() {
        let toml_str = r#"
model = "gpt-4o"

[[models]]
id = "gpt-4o"
tool_calls = true
modes = ["chat", "agent"]

[[models]]
id = "o1-mini"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.len(), 2);

        let gpt = find_model(&config.models, "gpt-4o").unwrap();
        assert!(gpt.allows_tool_calls(Mode::Agent));
        assert!(!gpt.allows_tool_calls(Mode::Vision));

        let mini = find_model(&config.models, "o1-mini").unwrap();
        assert!(!mini.tool_calls);
        assert!(mini.modes.is_empty());
        assert!(find_model(&config.models, "missing").is_none());
    }
}
