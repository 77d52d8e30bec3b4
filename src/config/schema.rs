//! Configuration schema for hostrun
//!
//! Configuration is stored at `~/.config/hostrun/config.toml`, optionally
//! overlaid by a project-local `.hostrun.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Compiler invocation
    pub compiler: CompilerConfig,

    /// Project discovery
    pub project: ProjectConfig,

    /// Script host settings
    pub host: HostConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Program to execute (e.g. "tsc" or "npx")
    pub program: String,

    /// Arguments placed before hostrun's own flags (e.g. ["tsc"] with npx)
    pub args: Vec<String>,

    /// Kill the compiler after this many seconds (0 = no limit)
    pub timeout_secs: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "tsc".to_string(),
            args: vec![],
            timeout_secs: 0,
        }
    }
}

/// Project discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// File name searched for in ancestor directories
    pub config_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            config_file: "tsconfig.json".to_string(),
        }
    }
}

/// Script host configuration
///
/// `launch_args` and `locate_args` may contain `{script}` and `{app}`
/// placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Display name of the host application
    pub name: String,

    /// Program that runs a script in the host
    pub launch_program: String,

    /// Arguments for the launch program
    pub launch_args: Vec<String>,

    /// Optional program that prints the running host application's path
    pub locate_program: Option<String>,

    /// Arguments for the locate program
    pub locate_args: Vec<String>,

    /// Extensions the host can run directly
    pub script_extensions: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        let (launch_program, launch_args) = if cfg!(target_os = "macos") {
            (
                "osascript".to_string(),
                vec![
                    "-e".to_string(),
                    "tell application \"{app}\" to DoJavaScriptFile (POSIX file \"{script}\")"
                        .to_string(),
                ],
            )
        } else {
            ("extendscript".to_string(), vec!["{script}".to_string()])
        };

        Self {
            name: "Script host".to_string(),
            launch_program,
            launch_args,
            locate_program: None,
            locate_args: vec![],
            script_extensions: vec!["js".to_string(), "jsx".to_string(), "jsxinc".to_string()],
        }
    }
}
