//! Error types for hostrun
//!
//! All modules use `HostrunResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hostrun operations
pub type HostrunResult<T> = Result<T, HostrunError>;

/// All errors that can occur in hostrun
#[derive(Error, Debug)]
pub enum HostrunError {
    // Core errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} is unavailable: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Project errors
    #[error("No {file_name} found above {path}")]
    ProjectConfigNotFound { path: PathBuf, file_name: String },

    #[error("{file} is not part of the project at {config}")]
    FileNotInProject { file: PathBuf, config: PathBuf },

    #[error("Compilation failed for {project}:\n{output}")]
    CompileFailed { project: PathBuf, output: String },

    // Host errors
    #[error("Script host not found: {0}")]
    HostNotFound(String),

    #[error("Failed to launch {script} in {host}: {reason}")]
    HostLaunch {
        host: String,
        script: PathBuf,
        reason: String,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HostrunError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a tool unavailable error
    pub fn tool_unavailable(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ToolUnavailable {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Check if a manual retry may succeed without changing anything
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ToolUnavailable { .. } | Self::HostNotFound(_))
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ToolUnavailable { .. } => {
                Some("Install the compiler (npm i -g typescript) or set compiler.program")
            }
            Self::ProjectConfigNotFound { .. } => {
                Some("Run: tsc --init in the project root, or open a .js/.jsx script")
            }
            Self::FileNotInProject { .. } => {
                Some("Add the file to the project's include/files list")
            }
            Self::HostNotFound(_) => Some("Start the host application and try again"),
            _ => None,
        }
    }
}
