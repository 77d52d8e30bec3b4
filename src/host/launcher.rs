//! Script host abstraction
//!
//! A script host is the automation-capable application the compiled script
//! finally runs in. Locating and driving it is platform glue, kept behind
//! this trait.

use crate::error::HostrunResult;
use async_trait::async_trait;
use std::path::Path;

/// Application that can run a script file
#[async_trait]
pub trait ScriptHost: Send + Sync {
    /// Find the running host application, if a locate step is configured.
    ///
    /// Returns `Ok(None)` when the host could not be found.
    async fn locate(&self) -> HostrunResult<Option<String>>;

    /// Run `script` inside the host
    async fn launch(&self, script: &Path) -> HostrunResult<()>;

    /// Get the human-readable host name for display
    fn name(&self) -> &str;
}
