//! Per-file decision and copy.
use std::path::PathBuf;

use crate::config::RunFlags;
use crate::error::ProvisionError;
use crate::logging::{Log, Outcome};
use crate::operations::FileSystemOps;

/// A bundled template and where it lands in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path of the bundled file.
    pub source: PathBuf,
    /// Absolute path inside the project.
    pub destination: PathBuf,
}

impl FileEntry {
    /// Pair a source with its destination.
    #[must_use]
    pub const fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Destination file name, used in user-facing messages.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.destination.file_name().map_or_else(
            || self.destination.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}

/// What happened (or would happen) to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Destination was absent and has been created.
    Copy,
    /// Destination existed and has been replaced.
    Overwrite,
    /// Destination existed and was left untouched.
    Skip,
}

impl Action {
    /// Decide from destination existence and the run flags.
    #[must_use]
    pub const fn decide(exists: bool, flags: RunFlags) -> Self {
        match (exists, flags.overwrites()) {
            (false, _) => Self::Copy,
            (true, true) => Self::Overwrite,
            (true, false) => Self::Skip,
        }
    }
}

/// Provision one entry: ensure the destination directory, then copy,
/// overwrite or skip.
///
/// In dry-run mode nothing is written; the source is still checked so a
/// broken bundle is reported the same way.
///
/// # Errors
///
/// Returns [`ProvisionError`] if the destination directory cannot be created
/// or the copy fails. The caller logs it and moves on to the next entry.
pub fn provision_entry(
    entry: &FileEntry,
    flags: RunFlags,
    fs: &dyn FileSystemOps,
    log: &dyn Log,
) -> Result<Action, ProvisionError> {
    let name = entry.display_name();
    log.debug(&format!("{name}: source {}", entry.source.display()));

    if let Some(parent) = entry.destination.parent()
        && !parent.as_os_str().is_empty()
        && !fs.exists(parent)
    {
        if flags.dry_run {
            log.dry_run(&format!("would create directory {}", parent.display()));
        } else {
            fs.create_dir_all(parent)
                .map_err(|source| ProvisionError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            log.debug(&format!("created directory {}", parent.display()));
        }
    }

    let action = Action::decide(fs.exists(&entry.destination), flags);

    if flags.dry_run {
        if action != Action::Skip && !fs.exists(&entry.source) {
            return Err(copy_error(
                entry,
                std::io::Error::from(std::io::ErrorKind::NotFound),
            ));
        }
        match action {
            Action::Copy => log.dry_run(&format!("would copy {name}")),
            Action::Overwrite => log.dry_run(&format!("would overwrite {name}")),
            Action::Skip => skipped(log, &name),
        }
        return Ok(action);
    }

    match action {
        Action::Copy => {
            copy(entry, fs)?;
            log.file(Outcome::Copied, &format!("copied {name}"));
        }
        Action::Overwrite => {
            copy(entry, fs)?;
            log.file(Outcome::Overwrote, &format!("overwrote {name}"));
        }
        Action::Skip => skipped(log, &name),
    }
    Ok(action)
}

fn skipped(log: &dyn Log, name: &str) {
    log.file(Outcome::Skipped, &format!("skipped {name} (already exists)"));
}

fn copy(entry: &FileEntry, fs: &dyn FileSystemOps) -> Result<(), ProvisionError> {
    fs.copy(&entry.source, &entry.destination)
        .map(|_| ())
        .map_err(|e| copy_error(entry, e))
}

fn copy_error(entry: &FileEntry, source: std::io::Error) -> ProvisionError {
    ProvisionError::Copy {
        from: entry.source.clone(),
        to: entry.destination.clone(),
        source,
    }
}
