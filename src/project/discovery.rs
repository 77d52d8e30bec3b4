//! Project config discovery

use crate::error::{HostrunError, HostrunResult};
use std::path::{Component, Path, PathBuf};

/// Find the nearest `file_name` in the ancestors of `file`.
///
/// The search starts in the file's own directory.
pub fn find_project_config(file: &Path, file_name: &str) -> Option<PathBuf> {
    file.parent()?
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

/// Directory the compiler is pointed at for the project `config`
pub fn project_root(config: &Path) -> HostrunResult<&Path> {
    config
        .parent()
        .filter(|root| !root.as_os_str().is_empty())
        .ok_or_else(|| {
            HostrunError::InvalidArgument(format!(
                "project config {} has no parent directory",
                config.display()
            ))
        })
}

/// Whether the host runs `path` as-is, judged by extension (case-insensitive)
pub fn is_runnable_script(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Make `path` absolute and fold away `.` and `..` components.
///
/// Purely lexical: symlinks are not followed, and `..` at the root stays at
/// the root.
pub fn normalize_path(path: &Path) -> HostrunResult<PathBuf> {
    let absolute = std::path::absolute(path)
        .map_err(|e| HostrunError::io(format!("resolving {}", path.display()), e))?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
