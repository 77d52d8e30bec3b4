//! Compiler toolchain integration
//!
//! Wraps the external TypeScript compiler behind the `Toolchain` trait:
//! - listing a project's input files (`--listFilesOnly`)
//! - compiling and reporting emitted files (`--listEmittedFiles`)

mod capability;
mod compiler;
#[cfg(test)]
pub(crate) mod fake;

pub use capability::Toolchain;
pub use compiler::CompilerToolchain;

use crate::config::Config;
use std::path::PathBuf;
use std::sync::Arc;

/// Max number of output lines to include in compiler error messages.
const ERROR_TAIL_LINES: usize = 50;

/// Prefix tsc puts in front of each file written with `--listEmittedFiles`
const EMITTED_FILE_PREFIX: &str = "TSFILE:";

/// Create the toolchain described by the configuration
pub fn create_toolchain(config: &Config) -> Arc<dyn Toolchain> {
    Arc::new(CompilerToolchain::new(&config.compiler))
}

/// Extract the useful tail of compiler output for error diagnostics.
///
/// Combines stdout and stderr, then returns the last `ERROR_TAIL_LINES`
/// lines so error messages are actionable without being overwhelming.
pub(crate) fn build_error_output(stdout: &str, stderr: &str) -> String {
    let lines: Vec<&str> = stdout.lines().chain(stderr.lines()).collect();
    let total = lines.len();
    let tail: Vec<&str> = if total > ERROR_TAIL_LINES {
        lines[total - ERROR_TAIL_LINES..].to_vec()
    } else {
        lines
    };
    tail.join("\n")
}

/// Parse `--listFilesOnly` output, dropping blank lines and missing paths
pub(crate) fn parse_listed_files(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|path| path.exists())
        .collect()
}

/// Parse `--listEmittedFiles` output into the written paths
pub(crate) fn parse_emitted_files(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .filter_map(|line| line.trim().strip_prefix(EMITTED_FILE_PREFIX))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}
