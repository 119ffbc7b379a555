//! Application layer for cmdlayer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CommandSettings;
pub use ports::{
    capabilities::{CapabilitiesProvider, NativeFlags},
    function_source::{FunctionSource, NoFunctions},
    schema_sink::{LastSchemaSink, NoSchemaSink, SchemaSink, SchemaSnapshot},
    syntax_collector::{NoSyntax, SyntaxCollector},
};
pub use use_cases::availability::AvailabilityResolver;
pub use use_cases::command_schema::CommandSchemaUseCase;
pub use use_cases::tool_calls::ToolCallAdapter;
