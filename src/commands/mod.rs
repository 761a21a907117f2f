//! Top-level command entry points.
pub mod completions;
pub mod print;
pub mod setup;

/// Version string reported in verbose output.
#[must_use]
pub fn version() -> &'static str {
    option_env!("BAGEL_LINT_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
