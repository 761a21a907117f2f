//! The [`Log`] trait shared by the real logger and test doubles.

/// What happened to one provisioned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Destination was absent and has been created.
    Copied,
    /// Destination existed and has been replaced.
    Overwrote,
    /// Destination existed and was left alone.
    Skipped,
    /// The file could not be provisioned.
    Failed,
}

impl Outcome {
    /// Field value carried on the tracing event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copied => "copied",
            Self::Overwrote => "overwrote",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }

    /// Inverse of [`Outcome::as_str`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Copied, Self::Overwrote, Self::Skipped, Self::Failed]
            .into_iter()
            .find(|o| o.as_str() == name)
    }
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`; tests use a
/// recording implementation so they can assert on what the provisioning
/// loop reported without installing a subscriber.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);

    /// Report the outcome for one file.
    ///
    /// Failures are warnings; every other outcome is informational.
    fn file(&self, outcome: Outcome, msg: &str) {
        match outcome {
            Outcome::Failed => self.warn(msg),
            Outcome::Copied | Outcome::Overwrote | Outcome::Skipped => self.info(msg),
        }
    }
}
