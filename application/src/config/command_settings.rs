//! Command settings: a fixed snapshot of the state the resolver reads.
//!
//! [`CommandSettings`] implements
//! [`CapabilitiesProvider`](crate::ports::capabilities::CapabilitiesProvider)
//! directly, for embedders that hold their settings in memory rather than
//! in a configuration file.

use crate::ports::capabilities::{CapabilitiesProvider, NativeFlags};
use cmdlayer_domain::{Mode, ModelInfo};

/// Settings that drive command availability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSettings {
    pub mode: Mode,
    /// Currently selected model
    pub model: Option<ModelInfo>,
    /// Global `cmd` switch
    pub commands: bool,
    pub native: NativeFlags,
    /// `agent.experts`
    pub agent_experts: bool,
    /// Whether an inline-capable plugin is enabled
    pub inline_plugins: bool,
}

impl CommandSettings {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: ModelInfo) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_commands(mut self, enabled: bool) -> Self {
        self.commands = enabled;
        self
    }

    pub fn with_native(mut self, native: NativeFlags) -> Self {
        self.native = native;
        self
    }

    pub fn with_agent_experts(mut self, enabled: bool) -> Self {
        self.agent_experts = enabled;
        self
    }

    pub fn with_inline_plugins(mut self, enabled: bool) -> Self {
        self.inline_plugins = enabled;
        self
    }
}

impl CapabilitiesProvider for CommandSettings {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn current_model(&self) -> Option<ModelInfo> {
        self.model.clone()
    }

    fn native_flags(&self) -> NativeFlags {
        self.native
    }

    fn commands_enabled(&self) -> bool {
        self.commands
    }

    fn inline_commands_available(&self) -> bool {
        self.inline_plugins
    }

    fn agent_experts_enabled(&self) -> bool {
        self.agent_experts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CommandSettings::default();
        assert_eq!(settings.mode(), Mode::Chat);
        assert!(settings.current_model().is_none());
        assert!(!settings.commands_enabled());
        assert_eq!(settings.native_flags(), NativeFlags::default());
    }

    #[test]
    fn test_experts_enabled() {
        assert!(CommandSettings::new(Mode::Expert).experts_enabled());
        assert!(!CommandSettings::new(Mode::Agent).experts_enabled());
        assert!(
            CommandSettings::new(Mode::Agent)
                .with_agent_experts(true)
                .experts_enabled()
        );
        // agent.experts only matters for the legacy agent
        assert!(
            !CommandSettings::new(Mode::Chat)
                .with_agent_experts(true)
                .experts_enabled()
        );
    }
}
