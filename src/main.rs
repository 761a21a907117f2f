//! `bagel-lint-setup` binary.
use std::process::ExitCode;
use std::sync::Arc;

use bagel_lint_setup::cli::{Cli, Command};
use bagel_lint_setup::commands;
use bagel_lint_setup::logging::{self, Log, Logger};
use clap::Parser;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log: Arc<dyn Log> = Arc::new(Logger::new());

    let result = match &args.command {
        None => commands::setup::run(&args.setup, &log).map(|_| ()),
        Some(Command::Print(opts)) => commands::print::run(opts, &mut std::io::stdout().lock()),
        Some(Command::Completions(opts)) => {
            commands::completions::run(opts, &mut std::io::stdout().lock());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
