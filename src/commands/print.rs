//! Command: print a rule preset as JSON.
use std::io::Write;

use anyhow::{Context as _, Result};

use crate::catalog;
use crate::cli::PrintOpts;

/// Write the selected preset to `out`.
///
/// # Errors
///
/// Returns an error if serialisation or writing fails.
pub fn run(opts: &PrintOpts, out: &mut impl Write) -> Result<()> {
    let json = catalog::render(opts.preset)?;
    writeln!(out, "{json}").context("writing preset")
}
