//! Domain-specific error types for the setup tool.
//!
//! Internal modules return typed errors while command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! SetupError
//! ├── UpgradeSpawn / UpgradeFailed: fatal, abort before provisioning
//! └── Manifest                     : template manifest unreadable or malformed
//! ProvisionError                   : per-entry, recorded and reported as a warning
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the run with a non-zero exit code.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The package-manager update command could not be started.
    #[error("failed to run '{command}': {reason}")]
    UpgradeSpawn {
        /// The full command line that was attempted.
        command: String,
        /// Underlying spawn error, rendered with its context chain.
        reason: String,
    },

    /// The package-manager update command exited non-zero.
    #[error("'{command}' failed (exit {})", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    UpgradeFailed {
        /// The full command line that was run.
        command: String,
        /// Exit code, or `None` when the process was terminated by a signal.
        code: Option<i32>,
    },

    /// The template manifest exists but could not be loaded.
    #[error("invalid template manifest {path}: {message}")]
    Manifest {
        /// Path of the manifest file.
        path: PathBuf,
        /// Human-readable parse or read failure.
        message: String,
    },
}

/// Per-entry provisioning failures. These never abort the run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The destination's parent directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The template could not be copied into place.
    #[error("cannot copy {from} to {to}: {source}")]
    Copy {
        /// Template source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
