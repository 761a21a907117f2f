//! Run configuration: flags, directories and the file list.
pub mod manifest;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::cli::SetupOpts;
use crate::provision::FileEntry;
use manifest::Group;

/// Environment variable that overrides the templates directory.
pub const TEMPLATES_ENV: &str = "BAGEL_LINT_TEMPLATES";

/// Flags derived once from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Overwrite destinations that already exist.
    pub force_overwrite: bool,
    /// Run the package-manager update before provisioning.
    pub upgrade: bool,
    /// Report decisions without touching the filesystem or spawning anything.
    pub dry_run: bool,
}

impl RunFlags {
    /// Whether existing destinations are replaced. Upgrade implies force.
    #[must_use]
    pub const fn overwrites(&self) -> bool {
        self.force_overwrite || self.upgrade
    }
}

impl From<&SetupOpts> for RunFlags {
    fn from(opts: &SetupOpts) -> Self {
        Self {
            force_overwrite: opts.force,
            upgrade: opts.upgrade,
            dry_run: opts.dry_run,
        }
    }
}

/// Everything a provisioning run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the files are copied into.
    pub project_dir: PathBuf,
    /// Directory holding the bundled templates.
    pub templates_dir: PathBuf,
    /// Files to provision, in order.
    pub entries: Vec<FileEntry>,
    /// Behaviour flags.
    pub flags: RunFlags,
}

impl Config {
    /// Build a config from the command line, resolving directories and
    /// loading the template manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or the
    /// template manifest is malformed.
    pub fn from_opts(opts: &SetupOpts) -> Result<Self> {
        let project_dir = resolve_project_dir(opts.dir.as_deref())?;
        let templates_dir = resolve_templates_dir(opts.templates.as_deref());
        let templates = manifest::load(&templates_dir)?;
        Ok(Self::new(
            project_dir,
            templates_dir,
            &templates,
            opts.editor_settings,
            RunFlags::from(opts),
        ))
    }

    /// Build a config from already-resolved parts.
    #[must_use]
    pub fn new(
        project_dir: PathBuf,
        templates_dir: PathBuf,
        templates: &[manifest::Template],
        include_editor_settings: bool,
        flags: RunFlags,
    ) -> Self {
        let entries = templates
            .iter()
            .filter(|t| include_editor_settings || t.group != Group::EditorSettings)
            .map(|t| FileEntry::new(templates_dir.join(&t.source), project_dir.join(&t.target)))
            .collect();
        Self {
            project_dir,
            templates_dir,
            entries,
            flags,
        }
    }
}

/// Resolve the project directory: explicit `--dir`, else the current directory.
///
/// # Errors
///
/// Returns an error if no directory was given and the current directory is
/// unavailable.
pub fn resolve_project_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("determining current directory")?,
    };
    Ok(dunce::canonicalize(&dir).unwrap_or(dir))
}

/// Resolve the templates directory.
///
/// Order: explicit `--templates`, the `BAGEL_LINT_TEMPLATES` environment
/// variable, a `templates/` directory next to the installed binary (or the
/// crate root when running from `target/<profile>/`), and finally the
/// directory this crate was built from.
#[must_use]
pub fn resolve_templates_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return canonical(dir);
    }

    if let Ok(dir) = std::env::var(TEMPLATES_ENV)
        && !dir.is_empty()
    {
        return canonical(Path::new(&dir));
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        let candidates = [
            parent.join("templates"),
            parent.join("../templates"),
            parent.join("../share/bagel-lint-setup/templates"),
            parent.join("../../templates"),
        ];
        if let Some(found) = candidates.iter().find(|c| c.is_dir()) {
            return canonical(found);
        }
    }

    canonical(&Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
