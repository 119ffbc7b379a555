//! Prompt domain
//!
//! The command section of the system prompt, used when commands are offered
//! through the marker syntax instead of native tool calling.

pub mod command;

pub use command::{CommandPrompt, render_command_prompt};
