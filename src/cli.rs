//! Command-line interface.
use clap::{Parser, Subcommand};

use crate::catalog::Preset;

/// Top-level CLI entry point.
///
/// Without a subcommand the tool provisions the shared config files into the
/// project directory.
#[derive(Parser, Debug)]
#[command(
    name = "bagel-lint-setup",
    about = "Copy the shared lint, format and editor config files into a project",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subcommand; absent for a provisioning run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Provisioning flags.
    #[command(flatten)]
    pub setup: SetupOpts,
}

/// Options for the default provisioning run.
#[derive(Parser, Debug, Clone)]
pub struct SetupOpts {
    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Update the package with the project's package manager first, then overwrite existing files
    #[arg(short, long, visible_alias = "update")]
    pub upgrade: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Do not copy the editor settings files (.vscode/)
    #[arg(long = "no-editor-settings", action = clap::ArgAction::SetFalse)]
    pub editor_settings: bool,

    /// Project directory to provision (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<std::path::PathBuf>,

    /// Override the bundled templates directory
    #[arg(long, value_name = "DIR")]
    pub templates: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a rule preset as JSON
    Print(PrintOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
}

/// Options for the `print` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct PrintOpts {
    /// Preset to print
    #[arg(value_enum)]
    pub preset: Preset,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
