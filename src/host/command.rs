//! Command-driven script host
//!
//! Launches scripts by running a configured program (e.g. `osascript` on
//! macOS) with `{script}` and `{app}` substituted into its arguments.

use crate::config::schema::HostConfig;
use crate::error::{HostrunError, HostrunResult};
use crate::host::launcher::ScriptHost;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Script host driven by external commands
pub struct CommandHost {
    config: HostConfig,
}

impl CommandHost {
    /// Create a host from configuration
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    async fn app_name(&self) -> HostrunResult<String> {
        if self.config.locate_program.is_none() {
            return Ok(self.config.name.clone());
        }

        self.locate()
            .await?
            .ok_or_else(|| HostrunError::HostNotFound(self.config.name.clone()))
    }
}

/// Replace `{script}` and `{app}` placeholders in each argument
pub fn expand_args(args: &[String], script: &str, app: &str) -> Vec<String> {
    args.iter()
        .map(|arg| arg.replace("{script}", script).replace("{app}", app))
        .collect()
}

#[async_trait]
impl ScriptHost for CommandHost {
    async fn locate(&self) -> HostrunResult<Option<String>> {
        let Some(program) = &self.config.locate_program else {
            return Ok(None);
        };

        debug!("Locating host: {} {:?}", program, self.config.locate_args);

        let output = Command::new(program)
            .args(&self.config.locate_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| HostrunError::tool_unavailable(program, e.to_string()))?;

        if !output.status.success() {
            debug!("Locate command exited with {}", output.status);
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string))
    }

    async fn launch(&self, script: &Path) -> HostrunResult<()> {
        let app = self.app_name().await?;
        let script_arg = script.to_string_lossy();
        let args = expand_args(&self.config.launch_args, &script_arg, &app);

        info!("Running {} in {}", script.display(), app);
        debug!("Executing: {} {:?}", self.config.launch_program, args);

        let launch_error = |reason: String| HostrunError::HostLaunch {
            host: self.config.name.clone(),
            script: script.to_path_buf(),
            reason,
        };

        let output = Command::new(&self.config.launch_program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| launch_error(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(launch_error(format!(
                "{} exited with {}: {}",
                self.config.launch_program,
                output.status,
                stderr.trim()
            )))
        }
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
