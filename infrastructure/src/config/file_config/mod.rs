//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod models;
mod plugins;
mod prompt;

pub use agent::{FileAgentConfig, FileExpertPreset, FileExpertsConfig, FileFuncCallConfig};
pub use models::{FileModelConfig, find_model};
pub use plugins::FilePluginConfig;
pub use prompt::FilePromptConfig;

use cmdlayer_domain::{FunctionSchema, Mode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("models[{0}]: model id cannot be empty")]
    EmptyModelId(usize),

    #[error("plugins[{0}]: plugin id cannot be empty")]
    EmptyPluginId(usize),

    #[error("plugin id '{0}' is defined more than once")]
    DuplicatePluginId(String),

    #[error("model '{0}' is not defined in [[models]]")]
    UnknownModel(String),
}

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// mode = "chat"
/// model = "gpt-4o"
/// cmd = true
///
/// [func_call]
/// native = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Selected mode
    pub mode: Mode,
    /// Selected model ID
    pub model: Option<String>,
    /// Global command execution switch
    pub cmd: bool,
    /// Native tool calling for regular modes
    pub func_call: FileFuncCallConfig,
    /// Legacy agent settings
    pub agent: FileAgentConfig,
    /// Experts settings
    pub experts: FileExpertsConfig,
    /// Known models and their capabilities
    pub models: Vec<FileModelConfig>,
    /// Command plugins
    pub plugins: Vec<FilePluginConfig>,
    /// User-defined functions of the active preset
    pub functions: Vec<FunctionSchema>,
    /// Command prompt overrides
    pub prompt: FilePromptConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        for (index, model) in self.models.iter().enumerate() {
            if model.id.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyModelId(index));
            }
        }

        let mut seen = HashSet::new();
        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.id.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyPluginId(index));
            } else if !seen.insert(plugin.id.as_str()) {
                issues.push(ConfigValidationError::DuplicatePluginId(plugin.id.clone()));
            }
        }

        if let Some(model) = &self.model
            && !self.models.is_empty()
            && find_model(&self.models, model).is_none()
        {
            issues.push(ConfigValidationError::UnknownModel(model.clone()));
        }

        issues
    }

    /// The selected model's entry, if it is defined.
    pub fn current_model(&self) -> Option<&FileModelConfig> {
        self.model
            .as_deref()
            .and_then(|id| find_model(&self.models, id))
    }
}
