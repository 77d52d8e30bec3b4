//! Compiler capability abstraction
//!
//! The membership cache and the runner only ever talk to the compiler
//! through this trait, so tests can substitute deterministic fakes.

use crate::error::HostrunResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// External compiler and filesystem operations used by the core
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// List the absolute paths of every input file in the project rooted at
    /// `root`. Only paths that exist on disk are returned.
    async fn list_project_files(&self, root: &Path) -> HostrunResult<Vec<PathBuf>>;

    /// Compile the project rooted at `root` and return the files the
    /// compiler reports as written. An empty list means nothing was emitted.
    async fn compile_and_list_outputs(&self, root: &Path) -> HostrunResult<Vec<PathBuf>>;

    /// Read a file's modification time
    async fn read_modification_time(&self, path: &Path) -> HostrunResult<SystemTime>;

    /// Human-readable tool name for display
    fn tool_name(&self) -> &str;
}
