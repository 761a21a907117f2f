use crate::config::RunFlags;
use crate::logging::Log;

use super::entry::Action;

/// Per-run counters, one increment per file entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries whose destination was absent.
    pub copied: usize,
    /// Existing destinations replaced under force or upgrade.
    pub overwritten: usize,
    /// Existing destinations left untouched.
    pub skipped: usize,
    /// Entries that produced a warning and were not provisioned.
    pub failed: usize,
}

impl RunSummary {
    /// Count one completed entry.
    pub const fn record(&mut self, action: Action) {
        match action {
            Action::Copy => self.copied += 1,
            Action::Overwrite => self.overwritten += 1,
            Action::Skip => self.skipped += 1,
        }
    }

    /// Count one failed entry.
    pub const fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Total entries processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.copied + self.overwritten + self.skipped + self.failed
    }

    /// One-line count summary, e.g. `3 copied, 0 overwritten, 4 skipped`.
    #[must_use]
    pub fn counts_line(&self) -> String {
        let mut line = format!(
            "{} copied, {} overwritten, {} skipped",
            self.copied, self.overwritten, self.skipped
        );
        if self.failed > 0 {
            line.push_str(&format!(", {} failed", self.failed));
        }
        line
    }

    /// Print the end-of-run report, with a hint when files were skipped and
    /// no override flag was given.
    pub fn report(&self, flags: RunFlags, log: &dyn Log) {
        log.stage("Setup complete");
        log.info(&self.counts_line());
        if self.skipped > 0 && !flags.overwrites() {
            log.info("tip: use --force to overwrite existing files or --upgrade to update from GitHub");
            log.info("  bunx bagel-lint-setup --force");
            log.info("  bunx bagel-lint-setup --upgrade");
        }
    }
}
