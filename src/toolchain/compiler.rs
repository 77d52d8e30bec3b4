//! TypeScript compiler toolchain
//!
//! Implements the Toolchain trait by spawning `tsc` (or a configured
//! wrapper such as `npx tsc`) with tokio.

use crate::config::schema::CompilerConfig;
use crate::error::{HostrunError, HostrunResult};
use crate::toolchain::capability::Toolchain;
use crate::toolchain::{build_error_output, parse_emitted_files, parse_listed_files};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::{Duration, SystemTime};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Toolchain backed by the TypeScript compiler CLI
pub struct CompilerToolchain {
    program: String,
    base_args: Vec<String>,
    timeout: Option<Duration>,
}

impl CompilerToolchain {
    /// Create a toolchain from compiler configuration
    pub fn new(config: &CompilerConfig) -> Self {
        Self {
            program: config.program.clone(),
            base_args: config.args.clone(),
            timeout: (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs)),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.program.as_str()];
        parts.extend(self.base_args.iter().map(String::as_str));
        parts.extend(args);
        parts.join(" ")
    }

    /// Run the compiler against the project in `root`
    async fn exec(&self, root: &Path, args: &[&str]) -> HostrunResult<Output> {
        let description = self.describe(args);
        debug!("Executing: {} --project {}", description, root.display());

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args)
            .args(args)
            .arg("--project")
            .arg(root)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    HostrunError::tool_unavailable(
                        &description,
                        format!("timed out after {}s", limit.as_secs()),
                    )
                })?,
            None => cmd.output().await,
        };

        let output =
            result.map_err(|e| HostrunError::tool_unavailable(&description, e.to_string()))?;

        if output.status.code().is_none() {
            return Err(HostrunError::tool_unavailable(
                description,
                "terminated by signal",
            ));
        }

        Ok(output)
    }
}

#[async_trait]
impl Toolchain for CompilerToolchain {
    async fn list_project_files(&self, root: &Path) -> HostrunResult<Vec<PathBuf>> {
        let args = ["--listFilesOnly"];
        let output = self.exec(root, &args).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HostrunError::tool_unavailable(
                self.describe(&args),
                build_error_output(&stdout, &stderr),
            ));
        }

        let files = parse_listed_files(&stdout);
        debug!("{} lists {} files", root.display(), files.len());
        Ok(files)
    }

    async fn compile_and_list_outputs(&self, root: &Path) -> HostrunResult<Vec<PathBuf>> {
        info!("Compiling {}", root.display());

        let output = self.exec(root, &["--listEmittedFiles"]).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let emitted = parse_emitted_files(&stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if emitted.is_empty() {
                return Err(HostrunError::CompileFailed {
                    project: root.to_path_buf(),
                    output: build_error_output(&stdout, &stderr),
                });
            }
            // tsc still emits on type errors unless noEmitOnError is set
            warn!(
                "{} reported errors but emitted {} files",
                self.program,
                emitted.len()
            );
        }

        debug!("Emitted {} files", emitted.len());
        Ok(emitted)
    }

    async fn read_modification_time(&self, path: &Path) -> HostrunResult<SystemTime> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| HostrunError::io(format!("reading metadata of {}", path.display()), e))?;

        metadata
            .modified()
            .map_err(|e| HostrunError::io(format!("reading mtime of {}", path.display()), e))
    }

    fn tool_name(&self) -> &str {
        &self.program
    }
}
