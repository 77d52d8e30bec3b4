//! Compile-and-run workflow for the active editor file
//!
//! Ties the pieces together: find the governing project config, ask the
//! membership cache whether the file is compiled by it, compile, pick the
//! emitted script that matches the file, and hand it to the script host.
//! One `Runner` owns one membership cache, so a long-lived runner (the
//! `serve` command) only lists a project again after its config changes.

use crate::config::Config;
use crate::error::{HostrunError, HostrunResult};
use crate::host::{create_host, ScriptHost};
use crate::project::{
    find_project_config, is_runnable_script, normalize_path, project_root, select_best_match,
    MembershipCache,
};
use crate::toolchain::{create_toolchain, Toolchain};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// What running a file requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The file is a script the host runs as-is
    Direct { script: PathBuf },
    /// The file is compiled by the project at `config`
    Compile { config: PathBuf },
}

/// Stateful compile-and-run driver
pub struct Runner {
    toolchain: Arc<dyn Toolchain>,
    host: Arc<dyn ScriptHost>,
    membership: MembershipCache,
    config_file: String,
    script_extensions: Vec<String>,
}

impl Runner {
    /// Create a runner with explicit toolchain and host
    pub fn new(config: &Config, toolchain: Arc<dyn Toolchain>, host: Arc<dyn ScriptHost>) -> Self {
        Self {
            membership: MembershipCache::new(toolchain.clone()),
            toolchain,
            host,
            config_file: config.project.config_file.clone(),
            script_extensions: config.host.script_extensions.clone(),
        }
    }

    /// Create a runner using the configured compiler and host
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, create_toolchain(config), create_host(config))
    }

    /// Decide how `file` has to be handled, without compiling or launching
    pub async fn resolve(&mut self, file: &Path) -> HostrunResult<Resolution> {
        let file = normalize_path(file)?;
        let runnable = is_runnable_script(&file, &self.script_extensions);

        let Some(config) = find_project_config(&file, &self.config_file) else {
            if runnable {
                debug!("No {} for {}, running directly", self.config_file, file.display());
                return Ok(Resolution::Direct { script: file });
            }
            return Err(HostrunError::ProjectConfigNotFound {
                path: file,
                file_name: self.config_file.clone(),
            });
        };
        debug!("Using project config {}", config.display());

        if self.membership.is_file_listed(&file, &config).await? {
            return Ok(Resolution::Compile { config });
        }

        if runnable {
            debug!("{} is not compiled by {}, running directly", file.display(), config.display());
            Ok(Resolution::Direct { script: file })
        } else {
            Err(HostrunError::FileNotInProject { file, config })
        }
    }

    /// Resolve `file` and log the outcome, for callers that only report it
    pub async fn check(&mut self, file: &Path) -> HostrunResult<Resolution> {
        let resolution = self.resolve(file).await?;
        match &resolution {
            Resolution::Direct { script } => info!("{} runs directly", script.display()),
            Resolution::Compile { config } => info!("Compiled by {}", config.display()),
        }
        Ok(resolution)
    }

    /// Resolve `file`, compiling when needed, and return the script to run.
    ///
    /// `None` means the compiler emitted nothing the host can run.
    pub async fn prepare(&mut self, file: &Path) -> HostrunResult<Option<PathBuf>> {
        let file = normalize_path(file)?;

        let config = match self.resolve(&file).await? {
            Resolution::Direct { script } => return Ok(Some(script)),
            Resolution::Compile { config } => config,
        };

        let root = project_root(&config)?;
        let outputs: Vec<PathBuf> = self
            .toolchain
            .compile_and_list_outputs(root)
            .await?
            .into_iter()
            .filter(|path| is_runnable_script(path, &self.script_extensions))
            .collect();

        if outputs.is_empty() {
            info!("{} emitted no runnable scripts", self.toolchain.tool_name());
            return Ok(None);
        }

        let script = match outputs.as_slice() {
            [only] => only.clone(),
            _ => select_best_match(&file, &outputs)?.to_path_buf(),
        };
        debug!("Selected {} for {}", script.display(), file.display());

        Ok(Some(script))
    }

    /// Prepare `file` and launch the result in the script host
    ///
    /// Returns the launched script, or `None` when there was nothing to run.
    pub async fn run(&mut self, file: &Path) -> HostrunResult<Option<PathBuf>> {
        let Some(script) = self.prepare(file).await? else {
            return Ok(None);
        };

        self.launch(&script).await?;
        Ok(Some(script))
    }

    /// Launch an already prepared script in the script host
    pub async fn launch(&self, script: &Path) -> HostrunResult<()> {
        self.host.launch(script).await
    }

    /// Get the script host's display name
    pub fn host_name(&self) -> &str {
        self.host.name()
    }

    /// Inspect the membership cache
    pub fn membership(&self) -> &MembershipCache {
        &self.membership
    }

    /// Drop all cached project listings
    pub fn reset(&mut self) {
        self.membership.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;
    use crate::toolchain::fake::FakeToolchain;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        toolchain: Arc<FakeToolchain>,
        host: Arc<FakeHost>,
        runner: Runner,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            std::fs::create_dir_all(temp.path().join("src")).unwrap();
            std::fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

            let toolchain = Arc::new(FakeToolchain::new());
            toolchain.touch(temp.path().join("tsconfig.json"), 1_000);
            let host = Arc::new(FakeHost::new());
            let runner = Runner::new(&Config::default(), toolchain.clone(), host.clone());

            Self {
                temp,
                toolchain,
                host,
                runner,
            }
        }

        fn path(&self, relative: &str) -> PathBuf {
            self.temp.path().join(relative)
        }
    }

    #[tokio::test]
    async fn listed_file_is_compiled_and_best_output_launched() {
        let mut fx = Fixture::new();
        let source = fx.path("src/panel.ts");
        fx.toolchain.set_listing(&[fx.path("src/main.ts"), source.clone()]);
        fx.toolchain.set_outputs(&[
            fx.path("out/main.js"),
            fx.path("out/main.d.ts"),
            fx.path("out/panel.js"),
            fx.path("out/panel.js.map"),
        ]);

        let launched = fx.runner.run(&source).await.unwrap();

        assert_eq!(launched, Some(fx.path("out/panel.js")));
        assert_eq!(fx.host.launched(), vec![fx.path("out/panel.js")]);
        assert_eq!(fx.toolchain.compile_calls(), 1);
    }

    #[tokio::test]
    async fn repeated_runs_reuse_the_listing() {
        let mut fx = Fixture::new();
        let main = fx.path("src/main.ts");
        let panel = fx.path("src/panel.ts");
        fx.toolchain.set_listing(&[main.clone(), panel.clone()]);
        fx.toolchain.set_outputs(&[fx.path("out/main.js")]);

        fx.runner.run(&main).await.unwrap();
        fx.runner.run(&panel).await.unwrap();
        fx.runner.run(&main).await.unwrap();

        assert_eq!(fx.toolchain.list_calls(), 1);
        assert_eq!(fx.toolchain.compile_calls(), 3);

        fx.runner.reset();
        fx.runner.run(&main).await.unwrap();
        assert_eq!(fx.toolchain.list_calls(), 2);
    }

    #[tokio::test]
    async fn dot_dot_segments_resolve_to_the_listed_file() {
        let mut fx = Fixture::new();
        fx.toolchain.set_listing(&[fx.path("src/main.ts")]);

        let resolution = fx.runner.resolve(&fx.path("src/../src/main.ts")).await.unwrap();

        assert_eq!(
            resolution,
            Resolution::Compile {
                config: fx.path("tsconfig.json")
            }
        );
    }

    #[tokio::test]
    async fn check_resolves_without_compiling() {
        let mut fx = Fixture::new();
        let source = fx.path("src/main.ts");
        fx.toolchain.set_listing(&[source.clone()]);

        let resolution = fx.runner.check(&source).await.unwrap();

        assert!(matches!(resolution, Resolution::Compile { .. }));
        assert_eq!(fx.toolchain.list_calls(), 1);
        assert_eq!(fx.toolchain.compile_calls(), 0);
        assert!(fx.host.launched().is_empty());
    }

    #[tokio::test]
    async fn script_outside_project_runs_directly() {
        let mut fx = Fixture::new();
        fx.toolchain.set_listing(&[fx.path("src/main.ts")]);
        let script = fx.path("tools/cleanup.jsx");

        let resolution = fx.runner.resolve(&script).await.unwrap();
        assert_eq!(resolution, Resolution::Direct { script: script.clone() });

        let launched = fx.runner.run(&script).await.unwrap();
        assert_eq!(launched, Some(script));
        assert_eq!(fx.toolchain.compile_calls(), 0);
    }

    #[tokio::test]
    async fn typescript_outside_project_is_rejected() {
        let mut fx = Fixture::new();
        fx.toolchain.set_listing(&[fx.path("src/main.ts")]);

        let err = fx.runner.run(&fx.path("scratch/notes.ts")).await.unwrap_err();

        assert!(matches!(err, HostrunError::FileNotInProject { .. }));
        assert!(fx.host.launched().is_empty());
    }

    #[tokio::test]
    async fn no_project_config_and_not_a_script_is_an_error() {
        let temp = TempDir::new().unwrap();
        let toolchain = Arc::new(FakeToolchain::new());
        let mut config = Config::default();
        config.project.config_file = "hostrun-test-tsconfig.json".to_string();
        let mut runner = Runner::new(&config, toolchain.clone(), Arc::new(FakeHost::new()));

        let err = runner.resolve(&temp.path().join("a.ts")).await.unwrap_err();
        assert!(matches!(err, HostrunError::ProjectConfigNotFound { .. }));

        let script = temp.path().join("a.jsx");
        let resolution = runner.resolve(&script).await.unwrap();
        assert_eq!(resolution, Resolution::Direct { script });
        assert_eq!(toolchain.list_calls(), 0);
    }

    #[tokio::test]
    async fn nothing_emitted_means_nothing_to_run() {
        let mut fx = Fixture::new();
        let source = fx.path("src/main.ts");
        fx.toolchain.set_listing(&[source.clone()]);
        fx.toolchain.set_outputs(&[fx.path("out/main.d.ts")]);

        assert_eq!(fx.runner.run(&source).await.unwrap(), None);
        assert!(fx.host.launched().is_empty());
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let mut fx = Fixture::new();
        fx.toolchain.fail_listing(true);

        let err = fx.runner.run(&fx.path("src/main.ts")).await.unwrap_err();

        assert!(matches!(err, HostrunError::ToolUnavailable { .. }));
        assert_eq!(fx.toolchain.compile_calls(), 0);
    }

    #[tokio::test]
    async fn host_failure_propagates() {
        let mut fx = Fixture::new();
        let source = fx.path("src/main.ts");
        fx.toolchain.set_listing(&[source.clone()]);
        fx.toolchain.set_outputs(&[fx.path("out/main.js")]);
        fx.host.fail_launch(true);

        let err = fx.runner.run(&source).await.unwrap_err();
        assert!(matches!(err, HostrunError::HostNotFound(_)));
    }
}
