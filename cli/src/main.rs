//! CLI entrypoint for cmdlayer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use cmdlayer_application::{
    AvailabilityResolver, CommandSchemaUseCase, NoSchemaSink, SchemaSink, SyntaxCollector,
    ToolCallAdapter,
};
use cmdlayer_domain::command::marker;
use cmdlayer_domain::{
    AgentToolCall, ChatCompletionsToolCall, CommandDescriptor, CommandInvocation, CommandPrompt,
    ContextItem, Mode, ResponsesApiToolCall, SyntaxEvent, SyntaxEventKind,
};
use cmdlayer_infrastructure::config::find_model;
use cmdlayer_infrastructure::{
    BuiltinFunctionSource, ConfigCapabilities, ConfigLoader, FileConfig, JsonlSchemaSink,
    PluginRegistry,
};
use cmdlayer_presentation::{Cli, Command, ConsoleFormatter, DescriptorSource, OutputFormat, Provider};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting cmdlayer");

    if cli.show_config {
        for line in ConfigLoader::config_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let Some(command) = cli.command.clone() else {
        bail!("No subcommand given. Run `cmdlayer --help` for usage.");
    };

    // === Dependency Injection ===
    let app = App::new(config, cli.schema_log.as_deref());
    let output = app.run(command, cli.output)?;
    println!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

/// Wired application services
struct App {
    config: FileConfig,
    plugins: Arc<PluginRegistry>,
    schemas: CommandSchemaUseCase,
    resolver: AvailabilityResolver,
    adapter: ToolCallAdapter,
    prompt: CommandPrompt,
}

impl App {
    fn new(config: FileConfig, schema_log: Option<&Path>) -> Self {
        let plugins = Arc::new(PluginRegistry::from_config(&config.plugins));

        let sink: Arc<dyn SchemaSink> = match schema_log.and_then(|path| JsonlSchemaSink::new(path)) {
            Some(sink) => {
                debug!("Logging syntax blocks to {}", sink.path().display());
                Arc::new(sink)
            }
            None => Arc::new(NoSchemaSink),
        };
        let schemas = CommandSchemaUseCase::new(sink);

        let capabilities = Arc::new(ConfigCapabilities::new(config.clone(), plugins.clone()));
        let functions = Arc::new(BuiltinFunctionSource::from_config(&config));
        let resolver = AvailabilityResolver::new(capabilities, plugins.clone(), functions)
            .with_schemas(schemas.clone());

        Self {
            prompt: config.prompt.to_command_prompt(),
            config,
            plugins,
            schemas,
            resolver,
            adapter: ToolCallAdapter::new(),
        }
    }

    fn run(&self, command: Command, format: OutputFormat) -> Result<String> {
        let output = match command {
            Command::Extract { input, legacy, any } => {
                let text = read_input(input.as_deref())?;
                let invocations = if any {
                    marker::extract_any(&text)
                } else if legacy {
                    marker::extract_legacy(&text)
                } else {
                    marker::extract_all(&text)
                };
                ConsoleFormatter::invocations(&invocations, format)
            }

            Command::Encode { input } => {
                let invocations = parse_invocations(&read_input(input.as_deref())?)?;
                marker::encode_all(&invocations)
            }

            Command::Syntax { source } => {
                let block = self.schemas.syntax_block(&self.descriptors(&source)?);
                ConsoleFormatter::syntax_block(&block, format)
            }

            Command::Prompt { source, assistant } => {
                let assistant_mode = assistant || self.config.mode == Mode::Assistant;
                self.schemas
                    .command_prompt(&self.prompt, &self.descriptors(&source)?, assistant_mode)
            }

            Command::Schema { source, openai } => {
                let functions = self.schemas.function_schemas(&self.descriptors(&source)?);
                ConsoleFormatter::functions(&functions, format, openai)
            }

            Command::Unpack {
                input,
                provider,
                as_text,
            } => {
                let text = read_input(input.as_deref())?;
                let mut ctx = ContextItem::new();
                let conversion = match provider {
                    Provider::Chat => self
                        .adapter
                        .from_chat_completions(&parse_json::<Vec<ChatCompletionsToolCall>>(&text)?),
                    Provider::Responses => self
                        .adapter
                        .from_responses_api(&parse_json::<Vec<ResponsesApiToolCall>>(&text)?),
                    Provider::Agent => self
                        .adapter
                        .from_agent_tool_calls(&parse_json::<Vec<AgentToolCall>>(&text)?),
                    Provider::Stream => self.adapter.normalize_streamed_chunks(
                        &mut ctx,
                        &parse_json::<Vec<Value>>(&text)?,
                        false,
                    ),
                };

                if as_text {
                    ctx.tool_calls = conversion.items;
                    self.adapter.append_as_marker_text(&mut ctx);
                    ctx.output.unwrap_or_default()
                } else {
                    ConsoleFormatter::tool_calls(&conversion, format)
                }
            }

            Command::ReplyOutputs { input } => {
                let mut ctx: ContextItem = parse_json(&read_input(input.as_deref())?)?;
                let outputs = self.adapter.extract_tool_outputs_for_reply(&mut ctx);
                ConsoleFormatter::tool_outputs(&outputs, format)
            }

            Command::Functions {
                parent_id,
                force,
                openai,
            } => {
                let functions = self.resolver.collect_functions(parent_id.as_deref(), force);
                ConsoleFormatter::functions(&functions, format, openai)
            }

            Command::Native { force, model } => {
                let model = match model {
                    Some(id) => match find_model(&self.config.models, &id) {
                        Some(model) => Some(model),
                        None => bail!("model '{}' is not defined in [[models]]", id),
                    },
                    None => None,
                };
                let enabled = self.resolver.is_native_tool_calling_enabled(force, model);
                ConsoleFormatter::flag("native tool calling", enabled, format)
            }

            Command::Enabled { cmd } => {
                let enabled = self.resolver.is_command_name_enabled(&cmd);
                ConsoleFormatter::flag(&cmd, enabled, format)
            }
        };
        Ok(output)
    }

    /// Descriptors from the enabled plugins or from a JSON input
    fn descriptors(&self, source: &DescriptorSource) -> Result<Vec<CommandDescriptor>> {
        if source.plugins {
            let event = SyntaxEvent::new(SyntaxEventKind::Command);
            return Ok(self.plugins.collect_syntax(&event));
        }
        parse_json(&read_input(source.input.as_deref())?)
    }
}

/// Read the whole input file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).context("input is not valid JSON of the expected shape")
}

/// One invocation object, or an array of them
fn parse_invocations(text: &str) -> Result<Vec<CommandInvocation>> {
    match parse_json::<Value>(text)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).context("invalid command invocation"))
            .collect(),
        item => Ok(vec![
            serde_json::from_value(item).context("invalid command invocation")?,
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdlayer_domain::Param;

    fn app(toml_str: &str) -> App {
        App::new(toml::from_str(toml_str).unwrap(), None)
    }

    const CONFIG: &str = r#"
mode = "chat"
cmd = true

[func_call]
native = true

[[plugins]]
id = "files"

[[plugins.commands]]
cmd = "read_file"
instruction = "Read a file"
params = [{ name = "path", description = "File path", required = true }]
"#;

    #[test]
    fn test_parse_invocations_single_and_array() {
        let single = parse_invocations(r#"{"cmd":"ls","params":{}}"#).unwrap();
        assert_eq!(single, vec![CommandInvocation::new("ls")]);

        let many = parse_invocations(r#"[{"cmd":"a"},{"cmd":"b","params":{"x":1}}]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].params["x"], 1);

        assert!(parse_invocations("[1]").is_err());
    }

    #[test]
    fn test_plugin_descriptors() {
        let app = app(CONFIG);
        let source = DescriptorSource {
            input: None,
            plugins: true,
        };
        let descriptors = app.descriptors(&source).unwrap();
        assert_eq!(
            descriptors,
            vec![
                CommandDescriptor::new("read_file", "Read a file")
                    .with_param(Param::new("path", "File path", true))
            ]
        );
    }

    #[test]
    fn test_functions_and_enabled() {
        let app = app(CONFIG);
        let output = app
            .run(
                Command::Functions {
                    parent_id: None,
                    force: false,
                    openai: false,
                },
                OutputFormat::Json,
            )
            .unwrap();
        let functions: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(functions[0]["name"], "read_file");

        let output = app
            .run(
                Command::Enabled {
                    cmd: "read_file".to_string(),
                },
                OutputFormat::Json,
            )
            .unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&output).unwrap()["read_file"],
            true
        );
    }

    #[test]
    fn test_native_rejects_unknown_model() {
        let app = app(CONFIG);
        let result = app.run(
            Command::Native {
                force: false,
                model: Some("missing".to_string()),
            },
            OutputFormat::Json,
        );
        assert!(result.is_err());
    }
}
