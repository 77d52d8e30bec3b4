//! Terminal and editor-task output
//!
//! In a terminal the `cliclack` widgets are used. Editors capture task
//! output through a pipe, so there every line is printed as
//! `hostrun: <message>`, which problem matchers can pick up.

mod context;
mod output;
mod progress;

pub use context::UiContext;
pub use output::{banner, done, done_empty, field, saved, skipped};
pub use progress::TaskSpinner;
