//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    #[default]
    Pretty,
    /// JSON output
    Json,
}

/// Provider shape of tool calls read by `unpack`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    /// Chat Completions `tool_calls` (arguments as JSON text)
    Chat,
    /// Responses API output items
    Responses,
    /// Agent framework tool calls (arguments already parsed)
    Agent,
    /// Raw calls accumulated from a stream
    Stream,
}

/// CLI arguments for cmdlayer
#[derive(Parser, Debug)]
#[command(name = "cmdlayer")]
#[command(author, version, about = "Command and tool-call layer for chat assistants")]
#[command(long_about = r#"
cmdlayer converts between the ways a chat model can ask to run commands:
marker text embedded in the reply, and native provider tool calls.

Inputs are read from the file given as argument, or from stdin.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./cmdlayer.toml     Project-level config
3. ~/.config/cmdlayer/config.toml   Global config
4. CMDLAYER_* environment variables

Example:
  echo 'Sure. <tool>{"cmd":"ls","params":{}}</tool>' | cmdlayer extract
  cmdlayer syntax --plugins
  cmdlayer unpack --provider chat calls.json --as-text
  cmdlayer native --model gpt-4o
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Append every built syntax block to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub schema_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Where command descriptors come from
#[derive(Args, Debug, Clone)]
pub struct DescriptorSource {
    /// JSON file with an array of command descriptors (stdin if omitted)
    pub input: Option<PathBuf>,

    /// Use the commands of the enabled plugins from the configuration
    #[arg(long, conflicts_with = "input")]
    pub plugins: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract command invocations from marker text
    Extract {
        /// Text file to scan (stdin if omitted)
        input: Option<PathBuf>,

        /// Read the legacy `~###~` blocks instead of `<tool>` blocks
        #[arg(long, conflicts_with = "any")]
        legacy: bool,

        /// Read both marker syntaxes, in order of appearance
        #[arg(long)]
        any: bool,
    },

    /// Encode invocations (a JSON object or array) as marker text
    Encode {
        /// JSON file (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Build the compact command syntax block for a system prompt
    Syntax {
        #[command(flatten)]
        source: DescriptorSource,
    },

    /// Render the command section of the system prompt
    Prompt {
        #[command(flatten)]
        source: DescriptorSource,

        /// Use the assistant-mode extra text
        #[arg(long)]
        assistant: bool,
    },

    /// Build native function schemas
    Schema {
        #[command(flatten)]
        source: DescriptorSource,

        /// Print OpenAI-style `tools[]` entries
        #[arg(long)]
        openai: bool,
    },

    /// Convert provider tool calls into native tool calls
    Unpack {
        /// JSON file with an array of tool calls (stdin if omitted)
        input: Option<PathBuf>,

        /// Shape of the tool calls
        #[arg(short, long, value_enum, default_value = "chat")]
        provider: Provider,

        /// Print the calls as marker text instead
        #[arg(long)]
        as_text: bool,
    },

    /// Correlate command results with the tool calls of a context item
    ReplyOutputs {
        /// JSON file with a context item (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// List the functions offered to the model
    Functions {
        /// Parent context ID (set inside a sub-agent; hides expert calls)
        #[arg(long)]
        parent_id: Option<String>,

        /// Bypass the model and per-mode checks
        #[arg(long)]
        force: bool,

        /// Print OpenAI-style `tools[]` entries
        #[arg(long)]
        openai: bool,
    },

    /// Check whether native tool calling is enabled
    Native {
        /// Bypass the model and per-mode checks
        #[arg(long)]
        force: bool,

        /// Check this configured model instead of the selected one
        #[arg(long, value_name = "ID")]
        model: Option<String>,
    },

    /// Check whether a command is offered by any enabled plugin
    Enabled {
        /// Command name
        cmd: String,
    },
}
