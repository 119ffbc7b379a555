//! Command prompt overrides from TOML (`[prompt]` section)

use cmdlayer_domain::CommandPrompt;
use serde::{Deserialize, Serialize};

/// Raw prompt configuration from TOML
///
/// Unset keys keep the built-in texts.
///
/// # Example
///
/// ```toml
/// [prompt]
/// cmd = "Commands:\n{schema}\n{extra}"
/// extra = "Wait for the results."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Command prompt template; must contain `{schema}`
    pub cmd: Option<String>,
    /// Extra text for assistant mode
    pub extra_assistant: Option<String>,
    /// Extra text for every other mode
    pub extra: Option<String>,
}

impl FilePromptConfig {
    pub fn to_command_prompt(&self) -> CommandPrompt {
        let mut prompt = CommandPrompt::default();
        if let Some(template) = &self.cmd {
            prompt = prompt.with_template(template.clone());
        }
        if let Some(extra) = &self.extra_assistant {
            prompt = prompt.with_extra_assistant(extra.clone());
        }
        if let Some(extra) = &self.extra {
            prompt = prompt.with_extra(extra.clone());
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_builtin_texts() {
        assert_eq!(
            FilePromptConfig::default().to_command_prompt(),
            CommandPrompt::default()
        );
    }

    #[test]
    fn test_overrides() {
        let config = FilePromptConfig {
            cmd: Some("Commands: {schema} {extra}".to_string()),
            extra: Some("wait".to_string()),
            ..Default::default()
        };
        let prompt = config.to_command_prompt();
        assert_eq!(prompt.render("[]", false), "Commands: [] wait");
        assert_eq!(prompt.extra_assistant, CommandPrompt::default_extra_assistant());
    }
}
