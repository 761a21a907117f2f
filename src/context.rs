//! Side-effect handles shared by a run.
use std::sync::Arc;

use crate::exec::{Executor, SystemExecutor};
use crate::logging::Log;
use crate::operations::{FileSystemOps, SystemFileSystemOps};

/// Injectable side-effect handles for a provisioning run.
pub struct Context {
    /// Console logger.
    pub log: Arc<dyn Log>,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
    /// Filesystem operation abstraction (injectable for testing).
    pub fs_ops: Arc<dyn FileSystemOps>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("log", &"<dyn Log>")
            .field("executor", &self.executor)
            .field("fs_ops", &self.fs_ops)
            .finish()
    }
}

impl Context {
    /// Context backed by the real filesystem and process spawning.
    #[must_use]
    pub fn system(log: Arc<dyn Log>) -> Self {
        Self::new(log, Arc::new(SystemExecutor), Arc::new(SystemFileSystemOps))
    }

    /// Context with explicit collaborators.
    #[must_use]
    pub fn new(
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
        fs_ops: Arc<dyn FileSystemOps>,
    ) -> Self {
        Self {
            log,
            executor,
            fs_ops,
        }
    }
}
