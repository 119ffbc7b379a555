//! Function schemas that do not come from plugins.

mod builtin;

pub use builtin::{BuiltinFunctionSource, EXPERT_CALL, GOAL_STATUSES, GOAL_UPDATE};
