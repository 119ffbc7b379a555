//! Command domain module
//!
//! A **command** is something the model can ask the host application to do.
//! Plugins describe their commands with a [`CommandDescriptor`]; the model
//! asks for one through a [`CommandInvocation`].
//!
//! ```text
//! ┌────────────────────┐  build_syntax_block   ┌──────────────────────┐
//! │ CommandDescriptor  │──────────────────────▶│ prompt syntax block  │
//! │ (plugin declared)  │  build_function_schema┌──────────────────────┐
//! └────────────────────┘──────────────────────▶│ FunctionSchema       │
//!                                              └──────────────────────┘
//! model text ── extract_all ──▶ CommandInvocation ── encode_all ──▶ model text
//! ```
//!
//! # Key Types
//!
//! - [`CommandDescriptor`] / [`Param`]: what a plugin offers
//! - [`CommandInvocation`]: the canonical `{cmd, params}` form
//! - [`FunctionSchema`]: native function-calling definition
//! - [`SyntaxEvent`]: broadcast asking plugins for their descriptors
//!
//! Everything here is pure: no I/O and no logging. Best-effort operations
//! report what they dropped through return values.

pub mod entities;
pub mod events;
pub mod marker;
pub mod schema;
pub mod syntax;

pub use entities::{CommandDescriptor, CommandInvocation, Param, ParamType, Params};
pub use events::{SyntaxEvent, SyntaxEventKind};
pub use schema::{FunctionSchema, ParamIssue, SchemaBuild};
pub use syntax::SyntaxBlock;
