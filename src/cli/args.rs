//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hostrun - run the active file in an automation host
///
/// Compiles the file's TypeScript project when needed and launches the
/// matching script in the configured host application.
#[derive(Parser, Debug)]
#[command(name = "hostrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HOSTRUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .hostrun.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile if needed and run a file in the script host
    Run(RunArgs),

    /// Show how a file would be handled without running it
    Check(CheckArgs),

    /// Rank compiled outputs against a source path
    Match(MatchArgs),

    /// Serve JSON-line requests from an editor on stdin
    Serve,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// The active file
    pub file: PathBuf,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The file to inspect
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the match command
#[derive(Parser, Debug)]
pub struct MatchArgs {
    /// Source path to match against
    pub reference: PathBuf,

    /// Candidate output paths
    #[arg(required = true)]
    pub candidates: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output formats for listing commands
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Bare values, one per line
    Plain,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the global config file path
    Path,

    /// Write a default global config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
