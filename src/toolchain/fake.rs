//! In-memory toolchain for tests

use crate::error::{HostrunError, HostrunResult};
use crate::toolchain::Toolchain;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Toolchain whose listings, outputs and mtimes are set by the test
#[derive(Default)]
pub(crate) struct FakeToolchain {
    listing: Mutex<Vec<PathBuf>>,
    outputs: Mutex<Vec<PathBuf>>,
    mtimes: Mutex<HashMap<PathBuf, SystemTime>>,
    fail_listing: AtomicBool,
    list_calls: AtomicUsize,
    compile_calls: AtomicUsize,
}

impl FakeToolchain {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_listing<P: AsRef<Path>>(&self, files: &[P]) {
        *self.listing.lock().unwrap() = files.iter().map(|p| p.as_ref().to_path_buf()).collect();
    }

    pub(crate) fn set_outputs<P: AsRef<Path>>(&self, files: &[P]) {
        *self.outputs.lock().unwrap() = files.iter().map(|p| p.as_ref().to_path_buf()).collect();
    }

    /// Set `path`'s modification time to `millis` after the epoch
    pub(crate) fn touch(&self, path: impl AsRef<Path>, millis: u64) {
        self.mtimes.lock().unwrap().insert(
            path.as_ref().to_path_buf(),
            UNIX_EPOCH + Duration::from_millis(millis),
        );
    }

    pub(crate) fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn compile_calls(&self) -> usize {
        self.compile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Toolchain for FakeToolchain {
    async fn list_project_files(&self, _root: &Path) -> HostrunResult<Vec<PathBuf>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(HostrunError::tool_unavailable("fake-tsc", "not installed"));
        }
        Ok(self.listing.lock().unwrap().clone())
    }

    async fn compile_and_list_outputs(&self, _root: &Path) -> HostrunResult<Vec<PathBuf>> {
        self.compile_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.outputs.lock().unwrap().clone())
    }

    async fn read_modification_time(&self, path: &Path) -> HostrunResult<SystemTime> {
        self.mtimes
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .ok_or_else(|| {
                HostrunError::io(
                    format!("reading metadata of {}", path.display()),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                )
            })
    }

    fn tool_name(&self) -> &str {
        "fake-tsc"
    }
}
