//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the provisioning loop and
//! lockfile detection can be unit-tested without touching the real
//! filesystem.  Production code uses [`SystemFileSystemOps`]; tests use
//! `MockFileSystemOps`.

use std::path::Path;

/// Abstraction over the filesystem calls made while provisioning.
///
/// Implement this trait to swap in a fake during unit tests.  The production
/// implementation is [`SystemFileSystemOps`].
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Returns `true` if `path` exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if a component cannot be created.
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    /// Copy the contents of `from` to `to`, replacing `to` if it exists.
    ///
    /// Returns the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` cannot be read or `to` cannot be written.
    fn copy(&self, from: &Path, to: &Path) -> std::io::Result<u64>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> std::io::Result<u64> {
        std::fs::copy(from, to)
    }
}

/// In-memory [`FileSystemOps`] for unit tests.
///
/// Seed files and directories with the builder-style methods, then inspect
/// the resulting state with [`contents`](Self::contents) and
/// [`is_dir`](Self::is_dir).  Individual paths can be configured to fail
/// directory creation or writes so per-entry error handling can be exercised.
///
/// # Example
///
/// ```ignore
/// let fs = MockFileSystemOps::new()
///     .with_file("/tpl/.editorconfig", "root = true\n")
///     .with_dir("/proj");
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    files: std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, Vec<u8>>>,
    dirs: std::sync::Mutex<std::collections::HashSet<std::path::PathBuf>>,
    failing_dirs: std::collections::HashSet<std::path::PathBuf>,
    read_only: std::collections::HashSet<std::path::PathBuf>,
    copies: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl MockFileSystemOps {
    /// Create an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file with `content`; its ancestors are not implied.
    #[must_use]
    pub fn with_file(self, path: impl Into<std::path::PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .expect("mock files poisoned")
            .insert(path.into(), content.as_bytes().to_vec());
        self
    }

    /// Add an existing directory.
    #[must_use]
    pub fn with_dir(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dirs
            .lock()
            .expect("mock dirs poisoned")
            .insert(path.into());
        self
    }

    /// Make [`FileSystemOps::create_dir_all`] fail for `path`.
    #[must_use]
    pub fn with_failing_dir(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.failing_dirs.insert(path.into());
        self
    }

    /// Make any copy whose destination is `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn with_read_only(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.read_only.insert(path.into());
        self
    }

    /// Current content of the file at `path`, if any.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .expect("mock files poisoned")
            .get(path)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// Whether `path` is a known directory.
    #[must_use]
    pub fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().expect("mock dirs poisoned").contains(path)
    }

    /// Number of successful copy calls.
    #[must_use]
    pub fn copy_count(&self) -> usize {
        self.copies.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl FileSystemOps for MockFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .lock()
            .expect("mock files poisoned")
            .contains_key(path)
            || self.is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        if self.failing_dirs.contains(path) {
            return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        }
        let mut dirs = self.dirs.lock().expect("mock dirs poisoned");
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> std::io::Result<u64> {
        if self.read_only.contains(to) {
            return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        }
        let parent_ok = to.parent().is_none_or(|p| self.is_dir(p));
        if !parent_ok {
            return Err(std::io::Error::from(std::io::ErrorKind::NotFound));
        }
        let mut files = self.files.lock().expect("mock files poisoned");
        let data = files
            .get(from)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))?;
        let len = data.len() as u64;
        files.insert(to.to_path_buf(), data);
        self.copies
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(len)
    }
}
