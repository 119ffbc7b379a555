//! Port for function schemas that do not come from plugins.

use cmdlayer_domain::FunctionSchema;

/// Source of the non-plugin function schemas offered to the model.
pub trait FunctionSource: Send + Sync {
    /// Functions the legacy agent loop needs (e.g. goal updates).
    fn agent_functions(&self) -> Vec<FunctionSchema>;

    /// Functions for calling expert presets.
    fn expert_functions(&self) -> Vec<FunctionSchema>;

    /// Functions the user defined on the active preset.
    fn user_functions(&self) -> Vec<FunctionSchema>;
}

/// Source with no functions.
pub struct NoFunctions;

impl FunctionSource for NoFunctions {
    fn agent_functions(&self) -> Vec<FunctionSchema> {
        Vec::new()
    }

    fn expert_functions(&self) -> Vec<FunctionSchema> {
        Vec::new()
    }

    fn user_functions(&self) -> Vec<FunctionSchema> {
        Vec::new()
    }
}
