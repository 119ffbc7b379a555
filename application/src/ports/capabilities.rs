//! Capabilities provider port.
//!
//! The availability decisions depend on state the command layer does not
//! own: the selected mode and model, configuration flags, and which plugins
//! are enabled. This port exposes that state read-only, so the resolver can
//! be exercised with a plain [`CommandSettings`](crate::config::CommandSettings)
//! value in tests and with live configuration in the application.

use cmdlayer_domain::{Mode, ModelInfo};

/// Native tool-calling switches, one per mode family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeFlags {
    /// `func_call.native`
    pub general: bool,
    /// `agent.func_call.native`, used while the legacy agent is active
    pub agent: bool,
    /// `experts.func_call.native`, used while experts mode is active
    pub experts: bool,
}

/// Read-only view of the state availability decisions depend on.
///
/// Implementations must answer from current state on every call; callers
/// never cache the answers.
pub trait CapabilitiesProvider: Send + Sync {
    /// Currently selected mode.
    fn mode(&self) -> Mode;

    /// Currently selected model, if it is known.
    fn current_model(&self) -> Option<ModelInfo>;

    /// Native tool-calling switches.
    fn native_flags(&self) -> NativeFlags;

    /// The global `cmd` switch (command execution).
    fn commands_enabled(&self) -> bool;

    /// Whether an enabled plugin offers inline commands.
    fn inline_commands_available(&self) -> bool;

    /// Whether the legacy agent may call experts (`agent.experts`).
    fn agent_experts_enabled(&self) -> bool;

    /// Whether `model` accepts native tool definitions in `mode`.
    fn is_tool_call_allowed(&self, mode: Mode, model: &ModelInfo) -> bool {
        model.allows_tool_calls(mode)
    }

    /// Whether the legacy agent loop is running.
    fn legacy_agent_active(&self) -> bool {
        self.mode() == Mode::Agent
    }

    /// Whether the session is in experts mode.
    fn experts_active(&self) -> bool {
        self.mode() == Mode::Expert
    }

    /// Whether expert-call functions may be offered: experts mode, or the
    /// legacy agent with experts enabled.
    fn experts_enabled(&self) -> bool {
        self.experts_active() || (self.legacy_agent_active() && self.agent_experts_enabled())
    }
}
