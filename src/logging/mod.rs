//! Console logging for setup runs.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{Log, Outcome};

#[cfg(test)]
pub(crate) use types::test_helpers::RecordingLog;
