//! Run command - compile if needed and launch in the script host

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::HostrunResult;
use crate::runner::Runner;
use crate::ui::{self, TaskSpinner, UiContext};
use tracing::debug;

/// Execute the run command
pub async fn execute(args: RunArgs, config: &Config) -> HostrunResult<()> {
    let ctx = UiContext::detect();
    let mut runner = Runner::from_config(config);
    debug!("Using host: {}", runner.host_name());

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("preparing {}", args.file.display()));

    let script = match runner.prepare(&args.file).await {
        Ok(Some(script)) => script,
        Ok(None) => {
            spinner.stop("compiled");
            ui::done_empty(&ctx, "the compiler emitted no runnable script");
            return Ok(());
        }
        Err(e) => {
            spinner.stop_error("could not prepare a script");
            return Err(e);
        }
    };
    spinner.stop(&format!("script {}", script.display()));

    runner.launch(&script).await?;

    ui::done(
        &ctx,
        &format!("sent {} to {}", script.display(), runner.host_name()),
    );
    Ok(())
}
