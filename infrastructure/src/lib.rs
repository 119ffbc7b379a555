//! Infrastructure layer for cmdlayer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod functions;
pub mod logging;
pub mod plugins;

// Re-export commonly used types
pub use config::{
    ConfigCapabilities, ConfigError, ConfigLoader, ConfigValidationError, FileConfig,
    FilePluginConfig,
};
pub use functions::BuiltinFunctionSource;
pub use logging::JsonlSchemaSink;
pub use plugins::{PluginEntry, PluginRegistry};
