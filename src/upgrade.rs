//! Package-manager upgrade step run before provisioning with `--upgrade`.
use std::fmt;
use std::path::Path;

use crate::context::Context;
use crate::error::SetupError;
use crate::operations::FileSystemOps;

/// Package updated by the upgrade step.
pub const PACKAGE_NAME: &str = "@bagelink/lint-config";

/// Package manager inferred from the project's lockfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// `bun.lockb`
    Bun,
    /// `yarn.lock`
    Yarn,
    /// `pnpm-lock.yaml`
    Pnpm,
    /// No lockfile found.
    Npm,
}

impl PackageManager {
    /// Lockfiles in detection priority order.
    const LOCKFILES: [(&'static str, Self); 3] = [
        ("bun.lockb", Self::Bun),
        ("yarn.lock", Self::Yarn),
        ("pnpm-lock.yaml", Self::Pnpm),
    ];

    /// Detect the package manager from lockfiles in `dir`, defaulting to npm.
    #[must_use]
    pub fn detect(dir: &Path, fs: &dyn FileSystemOps) -> Self {
        Self::LOCKFILES
            .iter()
            .find(|(lockfile, _)| fs.exists(&dir.join(lockfile)))
            .map_or(Self::Npm, |&(_, pm)| pm)
    }

    /// Executable name.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Bun => "bun",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
        }
    }

    /// Subcommand that updates a single dependency.
    #[must_use]
    pub const fn update_verb(self) -> &'static str {
        match self {
            Self::Yarn => "upgrade",
            Self::Bun | Self::Pnpm | Self::Npm => "update",
        }
    }

    /// Build the update command for `package`.
    #[must_use]
    pub const fn update_command(self, package: &'static str) -> UpdateCommand {
        UpdateCommand {
            manager: self,
            package,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A fully-formed update invocation, e.g. `pnpm update @bagelink/lint-config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCommand {
    /// Package manager to invoke.
    pub manager: PackageManager,
    /// Package to update.
    pub package: &'static str,
}

impl UpdateCommand {
    /// Arguments after the program name.
    #[must_use]
    pub const fn args(&self) -> [&'static str; 2] {
        [self.manager.update_verb(), self.package]
    }
}

impl fmt::Display for UpdateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.manager.program(),
            self.manager.update_verb(),
            self.package
        )
    }
}

/// Update the config package in `project_dir` with the detected package
/// manager, streaming its output.
///
/// In dry-run mode the command is only reported.
///
/// # Errors
///
/// Returns [`SetupError::UpgradeSpawn`] if the package manager is not on
/// PATH or cannot be started, and [`SetupError::UpgradeFailed`] if it exits
/// unsuccessfully. Either is fatal to the run.
pub fn run_upgrade(project_dir: &Path, dry_run: bool, ctx: &Context) -> Result<(), SetupError> {
    let manager = PackageManager::detect(project_dir, ctx.fs_ops.as_ref());
    ctx.log.debug(&format!("detected package manager: {manager}"));
    let command = manager.update_command(PACKAGE_NAME);

    if dry_run {
        ctx.log.dry_run(&format!("would run: {command}"));
        return Ok(());
    }

    ctx.log.info(&format!("running: {command}"));

    if !ctx.executor.which(manager.program()) {
        return Err(SetupError::UpgradeSpawn {
            command: command.to_string(),
            reason: format!("{} not found on PATH", manager.program()),
        });
    }

    let result = ctx
        .executor
        .run_streaming(project_dir, manager.program(), &command.args())
        .map_err(|e| SetupError::UpgradeSpawn {
            command: command.to_string(),
            reason: format!("{e:#}"),
        })?;

    if !result.success {
        return Err(SetupError::UpgradeFailed {
            command: command.to_string(),
            code: result.code,
        });
    }

    ctx.log.info(&format!("updated {PACKAGE_NAME}"));
    Ok(())
}
