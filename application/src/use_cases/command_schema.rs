//! Command schema use case.
//!
//! Wraps the pure schema builders from the domain with the two side
//! concerns they leave to the caller: logging skipped parameters, and
//! handing each syntax block build to the [`SchemaSink`].

use crate::ports::schema_sink::{NoSchemaSink, SchemaSink, SchemaSnapshot};
use cmdlayer_domain::command::{schema, syntax};
use cmdlayer_domain::{CommandDescriptor, CommandPrompt, FunctionSchema, SyntaxBlock};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds prompt syntax blocks and native function schemas.
#[derive(Clone)]
pub struct CommandSchemaUseCase {
    sink: Arc<dyn SchemaSink>,
}

impl Default for CommandSchemaUseCase {
    fn default() -> Self {
        Self::new(Arc::new(NoSchemaSink))
    }
}

impl CommandSchemaUseCase {
    pub fn new(sink: Arc<dyn SchemaSink>) -> Self {
        Self { sink }
    }

    /// Build the compact syntax block and record the build in the sink.
    pub fn syntax_block(&self, descriptors: &[CommandDescriptor]) -> SyntaxBlock {
        let block = syntax::build_syntax_block(descriptors);
        debug!(
            commands = descriptors.len(),
            bytes = block.text.len(),
            "Built command syntax block"
        );
        self.sink.record(&SchemaSnapshot {
            descriptors: descriptors.to_vec(),
            structure: block.structure.clone(),
        });
        block
    }

    /// Render the command section of the system prompt.
    pub fn command_prompt(
        &self,
        prompt: &CommandPrompt,
        descriptors: &[CommandDescriptor],
        assistant_mode: bool,
    ) -> String {
        let block = self.syntax_block(descriptors);
        prompt.render(&block.text, assistant_mode)
    }

    /// Build one function schema; skipped parameters are logged.
    pub fn function_schema(&self, descriptor: &CommandDescriptor) -> FunctionSchema {
        let (function, issues) = schema::build_function_schema_with_issues(descriptor);
        for issue in &issues {
            warn!("Skipping parameter in function schema: {}", issue);
        }
        function
    }

    /// Build function schemas for every descriptor, in order.
    pub fn function_schemas(&self, descriptors: &[CommandDescriptor]) -> Vec<FunctionSchema> {
        descriptors
            .iter()
            .map(|d| self.function_schema(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::schema_sink::LastSchemaSink;
    use cmdlayer_domain::Param;

    #[test]
    fn test_syntax_block_is_recorded() {
        let sink = Arc::new(LastSchemaSink::new());
        let use_case = CommandSchemaUseCase::new(sink.clone());
        let descriptors = vec![CommandDescriptor::new("ls", "List files")];

        let block = use_case.syntax_block(&descriptors);
        assert_eq!(block.text, r#"{"ls":{"help":"List files"}}"#);

        let snapshot = sink.last().unwrap();
        assert_eq!(snapshot.descriptors, descriptors);
        assert_eq!(snapshot.structure, block.structure);
    }

    #[test]
    fn test_command_prompt() {
        let use_case = CommandSchemaUseCase::default();
        let prompt = CommandPrompt::default().with_template("{schema}/{extra}");
        let rendered = use_case.command_prompt(
            &prompt,
            &[CommandDescriptor::new("ls", "List")],
            true,
        );
        assert_eq!(
            rendered,
            format!(
                r#"{{"ls":{{"help":"List"}}}}/{}"#,
                CommandPrompt::default_extra_assistant()
            )
        );
    }

    #[test]
    fn test_function_schemas_skip_bad_params() {
        let use_case = CommandSchemaUseCase::default();
        let descriptors = vec![
            CommandDescriptor::new("a", "A").with_param(Param::new("", "bad", true)),
            CommandDescriptor::new("b", "B").with_param(Param::new("x", "ok", true)),
        ];
        let functions = use_case.function_schemas(&descriptors);
        assert_eq!(functions.len(), 2);
        assert!(functions[0].params["properties"].as_object().unwrap().is_empty());
        assert_eq!(functions[1].params["required"][0], "x");
    }
}
