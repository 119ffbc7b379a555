//! Availability resolver use case.
//!
//! Answers which command and tool-calling paths are open right now, and
//! assembles the function list offered to the model.
//!
//! # Native tool calling
//!
//! ```text
//! mode == completion ─────────────────────────────────► false
//! force ──────────────────────────────────────────────► func_call.native
//! model resolves but cannot call tools in this mode ──► false
//! legacy agent active ────────────────────────────────► agent.func_call.native
//! experts mode active ────────────────────────────────► experts.func_call.native
//! otherwise ──────────────────────────────────────────► func_call.native
//! ```
//!
//! # Function list order
//!
//! | # | Source            | Included when                               |
//! |---|-------------------|---------------------------------------------|
//! | 1 | Plugin commands   | native tool calling is enabled              |
//! | 2 | Agent functions   | legacy agent mode is active                 |
//! | 3 | Expert functions  | experts enabled and no parent context       |
//! | 4 | User functions    | always                                      |
//!
//! Nothing is cached: every call re-reads the injected ports.

use crate::ports::capabilities::CapabilitiesProvider;
use crate::ports::function_source::FunctionSource;
use crate::ports::syntax_collector::SyntaxCollector;
use crate::use_cases::command_schema::CommandSchemaUseCase;
use cmdlayer_domain::{FunctionSchema, ModelInfo, SyntaxEvent, SyntaxEventKind};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Resolves command and tool-calling availability from injected state.
#[derive(Clone)]
pub struct AvailabilityResolver {
    capabilities: Arc<dyn CapabilitiesProvider>,
    collector: Arc<dyn SyntaxCollector>,
    functions: Arc<dyn FunctionSource>,
    schemas: CommandSchemaUseCase,
}

impl AvailabilityResolver {
    pub fn new(
        capabilities: Arc<dyn CapabilitiesProvider>,
        collector: Arc<dyn SyntaxCollector>,
        functions: Arc<dyn FunctionSource>,
    ) -> Self {
        Self {
            capabilities,
            collector,
            functions,
            schemas: CommandSchemaUseCase::default(),
        }
    }

    /// Use a schema use case with a configured sink.
    pub fn with_schemas(mut self, schemas: CommandSchemaUseCase) -> Self {
        self.schemas = schemas;
        self
    }

    /// Whether native (provider-level) tool calling is enabled.
    ///
    /// `model` overrides the currently selected model for the capability
    /// check. When no model can be resolved the check is skipped.
    pub fn is_native_tool_calling_enabled(&self, force: bool, model: Option<&ModelInfo>) -> bool {
        let caps = &self.capabilities;
        let mode = caps.mode();
        if mode.disables_native_tools() {
            return false;
        }
        let flags = caps.native_flags();
        if force {
            return flags.general;
        }

        let current = match model {
            Some(model) => Some(model.clone()),
            None => caps.current_model(),
        };
        if let Some(model) = current
            && !caps.is_tool_call_allowed(mode, &model)
        {
            debug!(model = %model.id, mode = %mode, "Model cannot call tools in this mode");
            return false;
        }

        if caps.legacy_agent_active() {
            return flags.agent;
        }
        if caps.experts_active() {
            return flags.experts;
        }
        flags.general
    }

    /// Whether commands may be executed: the global `cmd` switch, or (when
    /// `check_inline`) an enabled inline-capable plugin.
    pub fn is_command_execution_enabled(&self, check_inline: bool) -> bool {
        self.capabilities.commands_enabled()
            || (check_inline && self.capabilities.inline_commands_available())
    }

    /// Whether any provider currently offers a command called `name`.
    ///
    /// Both event kinds are probed on every call.
    pub fn is_command_name_enabled(&self, name: &str) -> bool {
        let names: HashSet<String> = [SyntaxEventKind::Command, SyntaxEventKind::Inline]
            .into_iter()
            .flat_map(|kind| self.collector.collect_syntax(&SyntaxEvent::probe(kind)))
            .map(|descriptor| descriptor.cmd)
            .collect();
        names.contains(name)
    }

    /// Assemble the function schemas offered to the model.
    ///
    /// `parent_id` is set when running inside a sub-agent; expert functions
    /// are then withheld.
    pub fn collect_functions(&self, parent_id: Option<&str>, force: bool) -> Vec<FunctionSchema> {
        let mut functions = Vec::new();

        if self.is_native_tool_calling_enabled(force, None) {
            let kind = if self.is_command_execution_enabled(false) {
                SyntaxEventKind::Command
            } else {
                SyntaxEventKind::Inline
            };
            let descriptors = self.collector.collect_syntax(&SyntaxEvent::new(kind));
            debug!(kind = %kind, commands = descriptors.len(), "Collected plugin commands");
            functions.extend(self.schemas.function_schemas(&descriptors));
        }

        if self.capabilities.legacy_agent_active() {
            functions.extend(self.functions.agent_functions());
        }

        if self.capabilities.experts_enabled() && parent_id.is_none() {
            functions.extend(self.functions.expert_functions());
        }

        functions.extend(self.functions.user_functions());
        debug!(count = functions.len(), "Collected functions");
        functions
    }
}
