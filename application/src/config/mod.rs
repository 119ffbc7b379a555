//! Application-level configuration.
//!
//! - [`CommandSettings`]: snapshot of mode, model and switches that
//!   availability decisions depend on

pub mod command_settings;

pub use command_settings::CommandSettings;
