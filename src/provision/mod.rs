//! The provisioning run: optional upgrade, per-file loop, report.
//!
//! Entries are processed strictly in order. A failing entry is logged as a
//! warning and counted; it never stops the remaining entries. Only the
//! upgrade step can abort a run, and it does so before any file is touched.
mod entry;
mod summary;

pub use entry::{Action, FileEntry, provision_entry};
pub use summary::RunSummary;

use anyhow::Result;

use crate::config::{Config, RunFlags};
use crate::context::Context;
use crate::logging::Outcome;
use crate::upgrade;

/// Execute a full run against `config`.
///
/// # Errors
///
/// Returns an error only if the upgrade step fails. Per-entry failures are
/// reported as warnings and counted in [`RunSummary::failed`].
pub fn run(config: &Config, ctx: &Context) -> Result<RunSummary> {
    ctx.log
        .debug(&format!("project directory: {}", config.project_dir.display()));
    ctx.log
        .debug(&format!("templates directory: {}", config.templates_dir.display()));

    if config.flags.upgrade {
        ctx.log.stage("Updating @bagelink/lint-config");
        upgrade::run_upgrade(&config.project_dir, config.flags.dry_run, ctx)?;
    }

    ctx.log.stage("Setting up @bagelink/lint-config");
    if config.flags.overwrites() {
        ctx.log.warn("force mode enabled - will overwrite existing files");
    }

    let summary = provision(&config.entries, config.flags, ctx);
    summary.report(config.flags, ctx.log.as_ref());
    Ok(summary)
}

/// Provision each entry in order, continuing past failures.
#[must_use]
pub fn provision(entries: &[FileEntry], flags: RunFlags, ctx: &Context) -> RunSummary {
    let mut summary = RunSummary::default();
    for entry in entries {
        match provision_entry(entry, flags, ctx.fs_ops.as_ref(), ctx.log.as_ref()) {
            Ok(action) => summary.record(action),
            Err(e) => {
                ctx.log.file(
                    Outcome::Failed,
                    &format!("failed to provision {}: {e}", entry.display_name()),
                );
                summary.record_failure();
            }
        }
    }
    summary
}
