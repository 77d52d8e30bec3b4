//! hostrun - compile the active file's project and run it in a script host
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use hostrun::cli::{Cli, Commands};
use hostrun::config::{Config, ConfigManager};
use hostrun::error::{HostrunError, HostrunResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> HostrunResult<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).await?;
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Run(args) => hostrun::cli::commands::run(args, &config).await,
        Commands::Check(args) => hostrun::cli::commands::check(args, &config).await,
        Commands::Match(args) => hostrun::cli::commands::match_paths(args, &config).await,
        Commands::Serve => hostrun::cli::commands::serve(&config).await,
        Commands::Config(args) => {
            hostrun::cli::commands::config(args, &config, cli.config.clone()).await
        }
    }
}

async fn load_config(cli: &Cli) -> HostrunResult<Config> {
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let local_config_path = if cli.no_local {
        None
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| HostrunError::io("getting current directory", e))?;
        ConfigManager::find_local_config(&cwd)
    };

    config_manager
        .load_merged(local_config_path.as_deref())
        .await
}

/// Logs go to stderr so `serve` keeps stdout for responses.
/// 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("hostrun=warn"),
        1 => EnvFilter::new("hostrun=info"),
        _ => EnvFilter::new("hostrun=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    debug!("Log format: {}", config.general.log_format);
}
