//! Console formatting and subscriber initialisation.
use std::io::IsTerminal as _;

use tracing::Level;

use super::logger::{DRY_RUN_TARGET, FILE_TARGET, STAGE_TARGET};
use super::types::Outcome;

/// Pulls the `message` and `outcome` fields out of an event.
#[derive(Default)]
struct Fields {
    message: String,
    outcome: Option<Outcome>,
}

impl tracing::field::Visit for Fields {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "outcome" => self.outcome = Outcome::from_name(value),
            _ => {}
        }
    }
}

/// Kind of console line, decided from level, target and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Stage,
    DryRun,
    File(Outcome),
    Error,
    Warn,
    Info,
    Debug,
}

impl LineKind {
    fn classify(level: Level, target: &str, outcome: Option<Outcome>) -> Self {
        match (level, target, outcome) {
            (_, FILE_TARGET, Some(o)) => Self::File(o),
            (Level::ERROR, _, _) => Self::Error,
            (Level::WARN, _, _) => Self::Warn,
            (Level::INFO, STAGE_TARGET, _) => Self::Stage,
            (Level::INFO, DRY_RUN_TARGET, _) => Self::DryRun,
            (Level::INFO, _, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Indent, marker, marker SGR code, message SGR code.
    const fn look(self) -> (&'static str, &'static str, &'static str, Option<&'static str>) {
        match self {
            Self::Stage => ("", "==>", "1;34", Some("1")),
            Self::DryRun => ("  ", "[dry run]", "33", None),
            Self::File(Outcome::Copied) => ("  ", "\u{2713}", "32", None),
            Self::File(Outcome::Overwrote) => ("  ", "\u{21bb}", "36", None),
            Self::File(Outcome::Skipped) => ("  ", "-", "2", Some("2")),
            Self::File(Outcome::Failed) => ("  ", "\u{2717}", "31", None),
            Self::Error => ("", "error:", "1;31", None),
            Self::Warn => ("", "warning:", "1;33", None),
            Self::Info => ("  ", "", "", None),
            Self::Debug => ("  ", "", "", Some("2")),
        }
    }
}

fn paint(text: &str, sgr: &str, color: bool) -> String {
    if color && !sgr.is_empty() {
        format!("\x1b[{sgr}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn render(kind: LineKind, msg: &str, color: bool) -> String {
    let (indent, marker, marker_sgr, text_sgr) = kind.look();
    let mut line = String::from(indent);
    if !marker.is_empty() {
        line.push_str(&paint(marker, marker_sgr, color));
        line.push(' ');
    }
    line.push_str(&text_sgr.map_or_else(|| msg.to_string(), |sgr| paint(msg, sgr, color)));
    line
}

/// [`tracing_subscriber::fmt::FormatEvent`] for the setup console.
///
/// Colour is decided per stream, since warnings go to stderr and the rest to
/// stdout and either may be piped.
#[derive(Debug, Clone, Copy)]
struct ConsoleFormatter {
    stdout_color: bool,
    stderr_color: bool,
}

impl ConsoleFormatter {
    const fn new(stdout_color: bool, stderr_color: bool) -> Self {
        Self {
            stdout_color,
            stderr_color,
        }
    }

    /// Colour only on terminals, and never when `NO_COLOR` is set.
    fn detect() -> Self {
        let allowed = std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty());
        Self::new(
            allowed && std::io::stdout().is_terminal(),
            allowed && std::io::stderr().is_terminal(),
        )
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut fields = Fields::default();
        event.record(&mut fields);

        let kind = LineKind::classify(level, metadata.target(), fields.outcome);
        let color = if matches!(level, Level::ERROR | Level::WARN) {
            self.stderr_color
        } else {
            self.stdout_color
        };
        writeln!(writer, "{}", render(kind, &fields.message, color))
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout, at `INFO`
/// or `DEBUG` when `verbose` is set. Call once at startup.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(ConsoleFormatter::detect())
                .with_writer(make_writer)
                .with_filter(level),
        )
        .init();
}

/// Shared in-memory sink for formatted output.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
struct Buffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl std::io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Buffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a thread-local uncoloured console subscriber and return
/// everything it printed.
#[cfg(test)]
pub(super) fn capture(verbose: bool, f: impl FnOnce()) -> String {
    use tracing_subscriber::{Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _};

    let buf = Buffer::default();
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .event_format(ConsoleFormatter::new(false, false))
            .with_writer(buf.clone())
            .with_filter(level),
    );
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().map(|b| b.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
