//! Check command - show how a file would be handled

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::error::HostrunResult;
use crate::runner::{Resolution, Runner};
use crate::ui::{self, UiContext};

/// Execute the check command
pub async fn execute(args: CheckArgs, config: &Config) -> HostrunResult<()> {
    let mut runner = Runner::from_config(config);
    let resolution = runner.check(&args.file).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
        OutputFormat::Plain => match &resolution {
            Resolution::Direct { script } => println!("direct {}", script.display()),
            Resolution::Compile { config } => println!("compile {}", config.display()),
        },
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::banner(&ctx, "Check");
            match &resolution {
                Resolution::Direct { script } => {
                    ui::field(&ctx, "action", "run directly");
                    ui::field(&ctx, "script", &script.display().to_string());
                }
                Resolution::Compile { config } => {
                    ui::field(&ctx, "action", "compile, then run");
                    ui::field(&ctx, "project", &config.display().to_string());
                }
            }
            ui::field(&ctx, "host", runner.host_name());
        }
    }

    Ok(())
}
