//! Command-line argument definitions for `agent-tools`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Generate agent tool descriptors from protobuf service definitions.
///
/// Reads a descriptor set produced by
/// `protoc --include_imports --descriptor_set_out=<FILE>` and writes a
/// TypeScript module exposing every command method as an agent tool.
#[derive(Parser, Debug)]
#[command(name = "agent-tools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for summaries (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the agent tools module.
    ///
    /// # Examples
    ///
    /// ```bash
    /// protoc --include_imports --descriptor_set_out=schema.pb -I proto proto/**/*.proto
    /// agent-tools generate --descriptor-set schema.pb --output src/generated/
    ///
    /// # print to stdout
    /// agent-tools generate --descriptor-set schema.pb --output -
    /// ```
    Generate {
        /// Serialized `FileDescriptorSet`
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Output file or directory; `-` prints the module to stdout
        ///
        /// Defaults to the configured output file name in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator config file (TOML)
        #[arg(short, long, env = "AGENT_TOOLS_CONFIG")]
        config: Option<PathBuf>,

        /// Designated command file, as named inside the descriptor set
        #[arg(long)]
        command_file: Option<String>,
    },

    /// List what generation would do without writing anything.
    ///
    /// Shows every method of the command file with its call kind, derived
    /// names and whether it becomes a tool.
    Inspect {
        /// Serialized `FileDescriptorSet`
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Generator config file (TOML)
        #[arg(short, long, env = "AGENT_TOOLS_CONFIG")]
        config: Option<PathBuf>,

        /// Designated command file, as named inside the descriptor set
        #[arg(long)]
        command_file: Option<String>,
    },

    /// Generate shell completion scripts.
    ///
    /// # Examples
    ///
    /// ```bash
    /// agent-tools completions bash > /etc/bash_completion.d/agent-tools
    /// ```
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
