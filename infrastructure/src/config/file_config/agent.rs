//! Native tool-calling switches from TOML (`[func_call]`, `[agent]`, `[experts]`)

use serde::{Deserialize, Serialize};

/// A `func_call` table
///
/// # Example
///
/// ```toml
/// [func_call]
/// native = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFuncCallConfig {
    /// Send commands as native tool definitions instead of prompt text
    pub native: bool,
}

/// Legacy agent configuration (`[agent]` section)
///
/// # Example
///
/// ```toml
/// [agent]
/// experts = true
///
/// [agent.func_call]
/// native = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Native tool calling while the legacy agent runs
    pub func_call: FileFuncCallConfig,
    /// Allow the legacy agent to call experts
    pub experts: bool,
}

/// Expert preset that can be called as a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExpertPreset {
    /// Preset ID passed as `expert_call.id`
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Experts configuration (`[experts]` section)
///
/// # Example
///
/// ```toml
/// [experts.func_call]
/// native = false
///
/// [[experts.presets]]
/// id = "translator"
/// name = "Translator"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExpertsConfig {
    /// Native tool calling in experts mode
    pub func_call: FileFuncCallConfig,
    /// Presets offered through `expert_call`
    pub presets: Vec<FileExpertPreset>,
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_nested_func_call_tables() {
        let toml_str = r#"
[func_call]
native = true

[agent]
experts = true

[agent.func_call]
native = false

[experts.func_call]
native = true

[[experts.presets]]
id = "translator"
name = "Translator"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.func_call.native);
        assert!(config.agent.experts);
        assert!(!config.agent.func_call.native);
        assert!(config.experts.func_call.native);
        assert_eq!(config.experts.presets[0].id, "translator");
    }
}
