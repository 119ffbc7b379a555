//! Operating mode of the chat session.

use serde::{Deserialize, Serialize};

/// Operating mode selected for the current session.
///
/// The mode decides which function sources are consulted when assembling the
/// tool list for a request, and whether native tool calling is possible at
/// all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Regular chat completions (default)
    #[default]
    Chat,
    /// Plain text completion; never supports native tool calls
    Completion,
    /// Hosted assistant threads
    Assistant,
    /// Image input
    Vision,
    /// Index-backed chat
    LlamaIndex,
    /// Legacy autonomous agent loop
    Agent,
    /// Agent driven by an external agent framework
    AgentLlama,
    /// Experts mode: a parent conversation that can call expert presets
    Expert,
    /// Web research
    Research,
}

impl Mode {
    /// Modes in which native tool calling is always disabled.
    pub const NATIVE_DISABLED: &'static [Mode] = &[Mode::Completion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chat => "chat",
            Mode::Completion => "completion",
            Mode::Assistant => "assistant",
            Mode::Vision => "vision",
            Mode::LlamaIndex => "llama_index",
            Mode::Agent => "agent",
            Mode::AgentLlama => "agent_llama",
            Mode::Expert => "expert",
            Mode::Research => "research",
        }
    }

    /// Whether native tool calling can never be used in this mode.
    pub fn disables_native_tools(&self) -> bool {
        Self::NATIVE_DISABLED.contains(self)
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(Mode::Chat),
            "completion" => Ok(Mode::Completion),
            "assistant" => Ok(Mode::Assistant),
            "vision" => Ok(Mode::Vision),
            "llama_index" => Ok(Mode::LlamaIndex),
            "agent" => Ok(Mode::Agent),
            "agent_llama" => Ok(Mode::AgentLlama),
            "expert" => Ok(Mode::Expert),
            "research" => Ok(Mode::Research),
            _ => Err(format!("Invalid Mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
