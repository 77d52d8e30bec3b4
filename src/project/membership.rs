//! Project membership cache
//!
//! Answers "is this file part of the compiled set rooted at this project
//! config?" without asking the compiler every time. A listing is reused
//! until the config file's modification time changes.
//!
//! # Freshness
//!
//! Staleness is detected lazily, at lookup, by comparing the config's
//! current mtime with the one recorded when it was last listed. The
//! comparison is exact, so any detectable edit invalidates the cache, but
//! an edit landing within the same mtime tick on a coarse filesystem is
//! not seen. Content hashing is deliberately not used.

use crate::error::HostrunResult;
use crate::project::discovery::project_root;
use crate::toolchain::Toolchain;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

/// Last known answer for one file
#[derive(Debug, Clone, PartialEq, Eq)]
struct MembershipEntry {
    /// Config whose listing produced this answer
    config_path: PathBuf,
    /// Config mtime of that listing
    listed_at: SystemTime,
    is_member: bool,
}

/// Membership cache keyed by file path, invalidated per project config
pub struct MembershipCache {
    toolchain: Arc<dyn Toolchain>,
    /// Config mtime observed at its last successful listing
    config_mtimes: HashMap<PathBuf, SystemTime>,
    entries: HashMap<PathBuf, MembershipEntry>,
}

impl MembershipCache {
    /// Create an empty cache that lists files through `toolchain`
    pub fn new(toolchain: Arc<dyn Toolchain>) -> Self {
        Self {
            toolchain,
            config_mtimes: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    /// Check whether `file` is part of the project rooted at `config`.
    ///
    /// On a miss the whole project is listed once and every listed file is
    /// recorded, so follow-up queries for sibling files are hits. Files the
    /// previous listing had and the new one lacks are recorded as removed.
    /// A failed listing leaves the cache exactly as it was.
    pub async fn is_file_listed(&mut self, file: &Path, config: &Path) -> HostrunResult<bool> {
        let modified = self.toolchain.read_modification_time(config).await?;

        if let Some(is_member) = self.lookup(file, config, modified) {
            debug!("Membership cache hit for {}", file.display());
            return Ok(is_member);
        }

        let root = project_root(config)?;
        debug!(
            "Membership cache miss for {}, listing {}",
            file.display(),
            root.display()
        );
        let listed = self.toolchain.list_project_files(root).await?;

        // Only record the mtime once there is a listing to back it
        self.config_mtimes.insert(config.to_path_buf(), modified);

        // Anything this config listed before is out unless listed again
        for entry in self.entries.values_mut() {
            if entry.config_path == config {
                entry.listed_at = modified;
                entry.is_member = false;
            }
        }

        let mut found = false;
        for path in listed {
            if path == file {
                found = true;
                continue;
            }
            self.record(path, config, modified, true);
        }
        self.record(file.to_path_buf(), config, modified, found);

        Ok(found)
    }

    fn record(&mut self, file: PathBuf, config: &Path, listed_at: SystemTime, is_member: bool) {
        self.entries.insert(
            file,
            MembershipEntry {
                config_path: config.to_path_buf(),
                listed_at,
                is_member,
            },
        );
    }

    fn lookup(&self, file: &Path, config: &Path, modified: SystemTime) -> Option<bool> {
        let entry = self.entries.get(file)?;
        if entry.config_path != config || entry.listed_at != modified {
            return None;
        }

        let recorded = self.config_mtimes.get(config)?;
        (*recorded == modified).then_some(entry.is_member)
    }

    /// Number of files with a recorded answer
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of project configs that have been listed
    pub fn tracked_configs(&self) -> usize {
        self.config_mtimes.len()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.entries.clear();
        self.config_mtimes.clear();
    }
}
