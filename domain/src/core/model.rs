//! Model capability description.

use crate::core::mode::Mode;
use serde::{Deserialize, Serialize};

/// What the command layer needs to know about a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier (e.g., "gpt-4o")
    pub id: String,
    /// Whether the provider accepts native tool definitions for this model
    #[serde(default)]
    pub tool_calls: bool,
    /// Modes the model may be used in; empty means every mode
    #[serde(default)]
    pub modes: Vec<Mode>,
}

impl ModelInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tool_calls: false,
            modes: Vec::new(),
        }
    }

    pub fn with_tool_calls(mut self, tool_calls: bool) -> Self {
        self.tool_calls = tool_calls;
        self
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.modes = modes.into_iter().collect();
        self
    }

    pub fn supports_mode(&self, mode: Mode) -> bool {
        self.modes.is_empty() || self.modes.contains(&mode)
    }

    /// Whether native tool calls can be sent to this model in `mode`.
    pub fn allows_tool_calls(&self, mode: Mode) -> bool {
        self.tool_calls && self.supports_mode(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_calls_require_flag() {
        let model = ModelInfo::new("gpt-3.5-turbo-instruct");
        assert!(!model.allows_tool_calls(Mode::Chat));
    }

    #[test]
    fn test_empty_modes_means_any_mode() {
        let model = ModelInfo::new("gpt-4o").with_tool_calls(true);
        assert!(model.allows_tool_calls(Mode::Chat));
        assert!(model.allows_tool_calls(Mode::Agent));
    }

    #[test]
    fn test_mode_restriction() {
        let model = ModelInfo::new("o1")
            .with_tool_calls(true)
            .with_modes([Mode::Chat, Mode::Expert]);
        assert!(model.allows_tool_calls(Mode::Expert));
        assert!(!model.allows_tool_calls(Mode::Agent));
    }
}
