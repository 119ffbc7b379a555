//! Capabilities provider backed by the loaded configuration.

use super::file_config::FileConfig;
use crate::plugins::PluginRegistry;
use cmdlayer_application::ports::capabilities::{CapabilitiesProvider, NativeFlags};
use cmdlayer_domain::{Mode, ModelInfo};
use std::sync::Arc;

/// [`CapabilitiesProvider`] over a [`FileConfig`] and the live plugin state.
///
/// A `model` that is not listed in `[[models]]` does not resolve, so the
/// tool-call capability check is skipped for it.
pub struct ConfigCapabilities {
    config: FileConfig,
    plugins: Arc<PluginRegistry>,
}

impl ConfigCapabilities {
    pub fn new(config: FileConfig, plugins: Arc<PluginRegistry>) -> Self {
        Self { config, plugins }
    }

    pub fn config(&self) -> &FileConfig {
        &self.config
    }
}

impl CapabilitiesProvider for ConfigCapabilities {
    fn mode(&self) -> Mode {
        self.config.mode
    }

    fn current_model(&self) -> Option<ModelInfo> {
        self.config.current_model().cloned()
    }

    fn native_flags(&self) -> NativeFlags {
        NativeFlags {
            general: self.config.func_call.native,
            agent: self.config.agent.func_call.native,
            experts: self.config.experts.func_call.native,
        }
    }

    fn commands_enabled(&self) -> bool {
        self.config.cmd
    }

    fn inline_commands_available(&self) -> bool {
        self.plugins.has_enabled_inline()
    }

    fn agent_experts_enabled(&self) -> bool {
        self.config.agent.experts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::PluginEntry;

    fn config(toml_str: &str) -> FileConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_flags_from_config() {
        let caps = ConfigCapabilities::new(
            config(
                r#"
mode = "agent"
cmd = true
[func_call]
native = true
[agent]
experts = true
"#,
            ),
            Arc::new(PluginRegistry::new()),
        );
        assert_eq!(caps.mode(), Mode::Agent);
        assert!(caps.commands_enabled());
        assert_eq!(
            caps.native_flags(),
            NativeFlags {
                general: true,
                agent: false,
                experts: false,
            }
        );
        assert!(caps.experts_enabled());
    }

    #[test]
    fn test_tool_call_capability_from_models() {
        let caps = ConfigCapabilities::new(
            config(
                r#"
model = "gpt-4o"
[[models]]
id = "gpt-4o"
tool_calls = true
modes = ["chat"]
"#,
            ),
            Arc::new(PluginRegistry::new()),
        );
        let model = caps.current_model().unwrap();
        assert!(caps.is_tool_call_allowed(Mode::Chat, &model));
        assert!(!caps.is_tool_call_allowed(Mode::Vision, &model));
    }

    #[test]
    fn test_inline_availability_tracks_registry() {
        let plugins = Arc::new(
            PluginRegistry::new().with_plugin(PluginEntry::new("clock").with_inline(true), false),
        );
        let caps = ConfigCapabilities::new(FileConfig::default(), plugins.clone());
        assert!(!caps.inline_commands_available());
        plugins.set_enabled("clock", true);
        assert!(caps.inline_commands_available());
    }
}
