//! Command plugins.
//!
//! Provides [`PluginRegistry`], the syntax collector backed by the
//! `[[plugins]]` tables of the configuration.

mod registry;

pub use registry::{PluginEntry, PluginRegistry};
