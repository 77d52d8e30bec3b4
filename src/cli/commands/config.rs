//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::HostrunResult;
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, path: Option<PathBuf>) -> HostrunResult<()> {
    let manager = path.map(ConfigManager::with_path).unwrap_or_default();

    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(&manager, force).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> HostrunResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> HostrunResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::skipped(
            &ctx,
            &format!("{} already exists", path.display()),
            "pass --force to overwrite it",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::saved(&ctx, "wrote default config", &path.display().to_string());
    Ok(())
}
