//! Spinner shown while the compiler runs

use super::context::UiContext;
use console::style;

/// Spinner in a terminal, a start line and an end line in an editor task
pub struct TaskSpinner {
    spinner: Option<cliclack::ProgressBar>,
    widgets: bool,
}

impl TaskSpinner {
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            spinner: None,
            widgets: ctx.use_fancy_output(),
        }
    }

    pub fn start(&mut self, message: &str) {
        if self.widgets {
            let spinner = cliclack::spinner();
            spinner.start(message);
            self.spinner = Some(spinner);
        } else {
            println!("{} {}", style("hostrun:").bold(), message);
        }
    }

    /// Finish the spinner, or print `message` as the end line
    pub fn stop(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => spinner.stop(message),
            None => println!("{} {}", style("hostrun:").bold(), message),
        }
    }

    /// Finish as failed; the error itself is printed by `main`
    pub fn stop_error(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => spinner.error(message),
            None => println!("{} {} {}", style("hostrun:").bold(), style("error:").red(), message),
        }
    }
}
