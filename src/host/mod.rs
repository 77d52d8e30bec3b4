//! Script host integration
//!
//! Runs the selected script inside the automation host application.

mod command;
#[cfg(test)]
pub(crate) mod fake;
mod launcher;

pub use command::{expand_args, CommandHost};
pub use launcher::ScriptHost;

use crate::config::Config;
use std::sync::Arc;

/// Create the script host described by the configuration
pub fn create_host(config: &Config) -> Arc<dyn ScriptHost> {
    Arc::new(CommandHost::new(config.host.clone()))
}
