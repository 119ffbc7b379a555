//! System prompt section that teaches the model the marker syntax.

/// Placeholder replaced by the command syntax block.
pub const SCHEMA_PLACEHOLDER: &str = "{schema}";
/// Placeholder replaced by the mode-dependent extra text.
pub const EXTRA_PLACEHOLDER: &str = "{extra}";

/// Templates for the command section of the system prompt.
///
/// `template` must contain [`SCHEMA_PLACEHOLDER`]; [`EXTRA_PLACEHOLDER`] is
/// optional. Two canned extras exist because hosted assistants execute
/// commands asynchronously and need different turn-taking instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPrompt {
    pub template: String,
    /// Extra text for assistant mode
    pub extra_assistant: String,
    /// Extra text for every other mode
    pub extra: String,
}

impl Default for CommandPrompt {
    fn default() -> Self {
        Self {
            template: Self::default_template().to_string(),
            extra_assistant: Self::default_extra_assistant().to_string(),
            extra: Self::default_extra().to_string(),
        }
    }
}

impl CommandPrompt {
    pub fn default_template() -> &'static str {
        r#"You can run commands on the user's machine. To run a command, write it in this exact format, anywhere in your reply:
<tool>{"cmd": "command_name", "params": {"param_name": "value"}}</tool>
Write one block per command; several blocks may follow each other. Use only the commands listed below, with the parameters they declare. Parameters marked "optional" may be left out.
Available commands (JSON):
{schema}
{extra}"#
    }

    pub fn default_extra() -> &'static str {
        "After writing the command blocks, stop and wait: the results will be sent back to you in the next message."
    }

    pub fn default_extra_assistant() -> &'static str {
        "After writing the command blocks, end your turn. Results arrive as a new user message; do not guess them."
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn with_extra_assistant(mut self, extra: impl Into<String>) -> Self {
        self.extra_assistant = extra.into();
        self
    }

    /// Substitute the syntax block and the extra text for the current mode.
    pub fn render(&self, syntax_block: &str, assistant_mode: bool) -> String {
        let extra = if assistant_mode {
            &self.extra_assistant
        } else {
            &self.extra
        };
        render_command_prompt(&self.template, syntax_block, extra)
    }
}

/// Replace `{schema}` and `{extra}` in `template`.
///
/// The extra text is substituted first so a syntax block that happens to
/// contain `{extra}` is left untouched.
pub fn render_command_prompt(template: &str, syntax_block: &str, extra: &str) -> String {
    template
        .replace(EXTRA_PLACEHOLDER, extra)
        .replace(SCHEMA_PLACEHOLDER, syntax_block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_picks_extra_by_mode() {
        let prompt = CommandPrompt::default()
            .with_template("S={schema} E={extra}")
            .with_extra("chat")
            .with_extra_assistant("assistant");

        assert_eq!(prompt.render("{}", false), "S={} E=chat");
        assert_eq!(prompt.render("{}", true), "S={} E=assistant");
    }

    #[test]
    fn test_default_template_has_placeholders() {
        let template = CommandPrompt::default_template();
        assert!(template.contains(SCHEMA_PLACEHOLDER));
        assert!(template.contains(EXTRA_PLACEHOLDER));

        let rendered = CommandPrompt::default().render(r#"{"ls":{"help":"List"}}"#, false);
        assert!(rendered.contains(r#"{"ls":{"help":"List"}}"#));
        assert!(rendered.ends_with(CommandPrompt::default_extra()));
        assert!(!rendered.contains(SCHEMA_PLACEHOLDER));
    }

    #[test]
    fn test_schema_text_is_not_reinterpreted() {
        let rendered = render_command_prompt("{schema}|{extra}", r#"{"x":"{extra}"}"#, "E");
        assert_eq!(rendered, r#"{"x":"{extra}"}|E"#);
    }

    #[test]
    fn test_template_without_extra() {
        assert_eq!(render_command_prompt("only {schema}", "S", "E"), "only S");
    }
}
