//! Default command: provision the config files.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::SetupOpts;
use crate::config::Config;
use crate::context::Context;
use crate::logging::Log;
use crate::provision::{self, RunSummary};

/// Run the default provisioning command.
///
/// # Errors
///
/// Returns an error if the project directory cannot be resolved, the template
/// manifest is invalid, or the upgrade step fails.
pub fn run(opts: &SetupOpts, log: &Arc<dyn Log>) -> Result<RunSummary> {
    log.debug(&format!("bagel-lint-setup {}", super::version()));
    let config = Config::from_opts(opts)?;
    if !opts.editor_settings {
        log.debug("editor settings excluded");
    }
    let ctx = Context::system(Arc::clone(log));
    provision::run(&config, &ctx)
}
