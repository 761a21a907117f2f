//! [`Log`] implementation that emits `tracing` events.
use super::types::{Log, Outcome};

/// Target of stage headers.
pub(super) const STAGE_TARGET: &str = "bagel_lint::stage";
/// Target of dry-run messages.
pub(super) const DRY_RUN_TARGET: &str = "bagel_lint::dry_run";
/// Target of per-file outcomes; the event carries an `outcome` field.
pub(super) const FILE_TARGET: &str = "bagel_lint::file";

/// Console logger for a run.
///
/// Formatting and filtering happen in the subscriber installed by
/// [`init_subscriber`](super::init_subscriber).
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    fn file(&self, outcome: Outcome, msg: &str) {
        let name = outcome.as_str();
        if outcome == Outcome::Failed {
            tracing::warn!(target: FILE_TARGET, outcome = name, "{msg}");
        } else {
            tracing::info!(target: FILE_TARGET, outcome = name, "{msg}");
        }
    }
}
