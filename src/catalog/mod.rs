//! Rule catalog: the shared formatter, hook and lint presets as typed data.
//!
//! Nothing here runs at setup time; the presets are rendered to JSON by the
//! `print` subcommand so other tools can consume them.
pub mod eslint;
pub mod lint_staged;
pub mod prettier;

use anyhow::{Context as _, Result};

/// Which preset to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Formatter options.
    Prettier,
    /// Staged-file hook table.
    LintStaged,
    /// Lint rule blocks.
    Eslint,
}

/// Render `preset` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn render(preset: Preset) -> Result<String> {
    let json = match preset {
        Preset::Prettier => serde_json::to_string_pretty(&prettier::preset()),
        Preset::LintStaged => serde_json::to_string_pretty(&lint_staged::preset()),
        Preset::Eslint => serde_json::to_string_pretty(&eslint::preset()),
    };
    json.with_context(|| format!("serializing {preset:?} preset"))
}
