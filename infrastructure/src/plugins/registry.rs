//! Plugin registry answering syntax collection events.
//!
//! | Event        | Plugins asked                         |
//! |--------------|---------------------------------------|
//! | `cmd`        | every enabled plugin                  |
//! | `cmd.inline` | enabled plugins marked `inline = true` |
//!
//! Enabled state can change at runtime; every collection reads it fresh.

use crate::config::FilePluginConfig;
use cmdlayer_application::ports::syntax_collector::SyntaxCollector;
use cmdlayer_domain::{CommandDescriptor, SyntaxEvent, SyntaxEventKind};
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::debug;

/// A registered plugin and the commands it offers.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginEntry {
    pub id: String,
    /// Commands usable through `cmd.inline`
    pub inline: bool,
    pub commands: Vec<CommandDescriptor>,
}

impl PluginEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inline: false,
            commands: Vec::new(),
        }
    }

    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn with_command(mut self, command: CommandDescriptor) -> Self {
        self.commands.push(command);
        self
    }

    fn answers(&self, kind: SyntaxEventKind) -> bool {
        match kind {
            SyntaxEventKind::Command => true,
            SyntaxEventKind::Inline => self.inline,
        }
    }
}

/// Registry of command plugins in registration order.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginEntry>,
    enabled: RwLock<HashSet<String>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the `[[plugins]]` tables.
    pub fn from_config(plugins: &[FilePluginConfig]) -> Self {
        plugins.iter().fold(Self::new(), |registry, plugin| {
            registry.with_plugin(
                PluginEntry {
                    id: plugin.id.clone(),
                    inline: plugin.inline,
                    commands: plugin.commands.clone(),
                },
                plugin.enabled,
            )
        })
    }

    pub fn with_plugin(mut self, entry: PluginEntry, enabled: bool) -> Self {
        if enabled {
            self.enabled_mut().insert(entry.id.clone());
        }
        self.plugins.push(entry);
        self
    }

    /// Enable or disable a plugin. Returns `false` if no plugin has this ID.
    pub fn set_enabled(&self, id: &str, enabled: bool) -> bool {
        if !self.plugins.iter().any(|p| p.id == id) {
            return false;
        }
        let mut state = self.enabled.write().unwrap_or_else(|p| p.into_inner());
        if enabled {
            state.insert(id.to_string());
        } else {
            state.remove(id);
        }
        debug!(plugin = id, enabled, "Plugin state changed");
        true
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled
            .read()
            .map(|state| state.contains(id))
            .unwrap_or_else(|p| p.into_inner().contains(id))
    }

    /// Whether any enabled plugin offers inline commands.
    pub fn has_enabled_inline(&self) -> bool {
        self.plugins
            .iter()
            .any(|p| p.inline && self.is_enabled(&p.id))
    }

    pub fn plugins(&self) -> &[PluginEntry] {
        &self.plugins
    }

    fn enabled_mut(&mut self) -> &mut HashSet<String> {
        self.enabled.get_mut().unwrap_or_else(|p| p.into_inner())
    }
}

impl SyntaxCollector for PluginRegistry {
    fn collect_syntax(&self, event: &SyntaxEvent) -> Vec<CommandDescriptor> {
        let mut commands = Vec::new();
        for plugin in &self.plugins {
            if !plugin.answers(event.kind) || !self.is_enabled(&plugin.id) {
                continue;
            }
            commands.extend(plugin.commands.iter().cloned());
        }
        debug!(
            kind = %event.kind,
            force = event.force,
            commands = commands.len(),
            "Collected command syntax"
        );
        commands
    }
}
