//! Core domain concepts shared across all subdomains.
//!
//! - [`mode::Mode`]: operating mode of the chat session
//! - [`model::ModelInfo`]: tool-calling capabilities of a model
//! - [`error`]: per-item failure types carried in diagnostics

pub mod error;
pub mod mode;
pub mod model;
