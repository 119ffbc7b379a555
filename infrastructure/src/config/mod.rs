//! Configuration file loading for cmdlayer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./cmdlayer.toml` or `./.cmdlayer.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/cmdlayer/config.toml`
//! 4. Environment: `CMDLAYER_*`
//! 5. Default values
//!
//! [`ConfigCapabilities`] exposes a loaded [`FileConfig`] to the application
//! layer through the capabilities port.

mod capabilities;
mod file_config;
mod loader;

pub use capabilities::ConfigCapabilities;
pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileConfig, FileExpertPreset, FileExpertsConfig,
    FileFuncCallConfig, FileModelConfig, FilePluginConfig, FilePromptConfig, find_model,
};
pub use loader::{ConfigError, ConfigLoader};
