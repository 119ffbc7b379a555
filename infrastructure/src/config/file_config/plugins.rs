//! Command plugins from TOML (`[[plugins]]` tables)

use cmdlayer_domain::CommandDescriptor;
use serde::{Deserialize, Serialize};

/// Raw plugin entry from TOML
///
/// # Example
///
/// ```toml
/// [[plugins]]
/// id = "files"
/// enabled = true
/// inline = false
///
/// [[plugins.commands]]
/// cmd = "read_file"
/// instruction = "Read a file from disk"
/// params = [{ name = "path", type = "str", description = "File path", required = true }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePluginConfig {
    /// Unique plugin ID
    pub id: String,
    /// Whether the plugin starts enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Whether the plugin's commands work without command execution (`cmd.inline`)
    #[serde(default)]
    pub inline: bool,
    /// Commands this plugin offers
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

fn default_enabled() -> bool {
    true
}
