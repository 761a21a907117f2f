//! Shared lint and format configuration installer.
//!
//! Copies a fixed set of boilerplate config files (ignore files, editor
//! config, compiler configs, editor settings) into a web project, skipping or
//! overwriting existing files depending on the flags, and optionally updating
//! the config package with the project's package manager first.
//!
//! - **[`config`]**: flags, directory resolution and the template manifest
//! - **[`provision`]**: the per-file create/skip/overwrite loop and its report
//! - **[`upgrade`]**: lockfile detection and the package-manager update
//! - **[`catalog`]**: formatter, hook and lint presets rendered as JSON
//! - **[`commands`]**: subcommand entry points
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exec;
pub mod logging;
pub mod operations;
pub mod provision;
pub mod upgrade;
