//! Recording script host for tests

use crate::error::{HostrunError, HostrunResult};
use crate::host::ScriptHost;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Script host that remembers what it was asked to launch
#[derive(Default)]
pub(crate) struct FakeHost {
    launched: Mutex<Vec<PathBuf>>,
    fail: AtomicBool,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_launch(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn launched(&self) -> Vec<PathBuf> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptHost for FakeHost {
    async fn locate(&self) -> HostrunResult<Option<String>> {
        Ok(Some("Fake Host".to_string()))
    }

    async fn launch(&self, script: &Path) -> HostrunResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(HostrunError::HostNotFound("Fake Host".to_string()));
        }
        self.launched.lock().unwrap().push(script.to_path_buf());
        Ok(())
    }

    fn name(&self) -> &str {
        "Fake Host"
    }
}
