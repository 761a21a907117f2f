#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the default provisioning run against a real
//! temporary project directory.

mod common;

use bagel_lint_setup::config::RunFlags;
use bagel_lint_setup::provision::{self, RunSummary};
use common::{TestContextBuilder, template_content};

const FORCE: RunFlags = RunFlags {
    force_overwrite: true,
    upgrade: false,
    dry_run: false,
};

// ---------------------------------------------------------------------------
// Copy-if-absent
// ---------------------------------------------------------------------------

/// An empty project receives every file.
#[test]
fn empty_project_copies_all_files() {
    let ctx = TestContextBuilder::new().build();
    let summary = provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            copied: 7,
            ..RunSummary::default()
        }
    );
    for t in ctx.templates_list() {
        assert_eq!(
            ctx.read(&t.target),
            Some(template_content(&t.source)),
            "{} should be a copy of {}",
            t.target,
            t.source
        );
    }
}

/// Destination parent directories are created on demand.
#[test]
fn missing_parent_directory_is_created() {
    let ctx = TestContextBuilder::new().build();
    assert!(!ctx.project_file(".vscode").exists());
    provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();
    assert!(ctx.project_file(".vscode").is_dir());
    assert!(ctx.project_file(".vscode/settings.json").is_file());
}

/// A second run without flags changes nothing.
#[test]
fn second_run_skips_everything() {
    let ctx = TestContextBuilder::new().build();
    let config = ctx.config(RunFlags::default());
    provision::run(&config, &ctx.context()).unwrap();
    let second = provision::run(&config, &ctx.context()).unwrap();
    assert_eq!(
        second,
        RunSummary {
            skipped: 7,
            ..RunSummary::default()
        }
    );
}

/// Existing files are left byte-for-byte untouched without `--force`.
#[test]
fn existing_files_are_skipped_unchanged() {
    let ctx = TestContextBuilder::new()
        .with_all_destinations("user edits\n")
        .build();
    let summary = provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();
    assert_eq!(summary.skipped, 7);
    assert_eq!(summary.copied + summary.overwritten, 0);
    for t in ctx.templates_list() {
        assert_eq!(ctx.read(&t.target).as_deref(), Some("user edits\n"));
    }
}

/// Only absent files are copied in a partially set-up project.
#[test]
fn partially_provisioned_project() {
    let ctx = TestContextBuilder::new()
        .with_project_file("tsconfig.json", "{}\n")
        .with_project_file(".editorconfig", "root = true\n")
        .build();
    let summary = provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();
    assert_eq!(summary.copied, 5);
    assert_eq!(summary.skipped, 2);
    assert_eq!(ctx.read("tsconfig.json").as_deref(), Some("{}\n"));
}

// ---------------------------------------------------------------------------
// Force
// ---------------------------------------------------------------------------

/// `--force` replaces every existing file with the template.
#[test]
fn force_overwrites_all_files() {
    let ctx = TestContextBuilder::new()
        .with_all_destinations("user edits\n")
        .build();
    let summary = provision::run(&ctx.config(FORCE), &ctx.context()).unwrap();
    assert_eq!(
        summary,
        RunSummary {
            overwritten: 7,
            ..RunSummary::default()
        }
    );
    for t in ctx.templates_list() {
        assert_eq!(ctx.read(&t.target), Some(template_content(&t.source)));
    }
}

/// Copies are byte-exact, including non-UTF-8 content.
#[test]
fn copy_is_byte_exact() {
    let ctx = TestContextBuilder::new().build();
    let bytes: Vec<u8> = (0..=255).collect();
    std::fs::write(ctx.templates.path().join("editorconfig/.editorconfig"), &bytes).unwrap();
    provision::run(&ctx.config(FORCE), &ctx.context()).unwrap();
    assert_eq!(std::fs::read(ctx.project_file(".editorconfig")).unwrap(), bytes);
}

// ---------------------------------------------------------------------------
// Failures and options
// ---------------------------------------------------------------------------

/// A missing template is a warning; the other files still arrive.
#[test]
fn missing_template_does_not_abort() {
    let ctx = TestContextBuilder::new()
        .without_template("tsconfig/tsconfig.app.json")
        .build();
    let summary = provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();
    assert_eq!(summary.copied, 6);
    assert_eq!(summary.failed, 1);
    assert!(ctx.read("tsconfig.app.json").is_none());
    assert!(ctx.read("tsconfig.node.json").is_some());
    let warnings = ctx.log.at("warn");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("failed to provision tsconfig.app.json"));
}

/// A file where a directory is needed blocks only the entries beneath it.
#[test]
fn blocked_parent_directory_skips_its_entries() {
    let ctx = TestContextBuilder::new()
        .with_project_file(".vscode", "not a directory")
        .build();
    let summary = provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();
    assert_eq!(summary.copied, 5);
    assert_eq!(summary.failed, 2);
    assert_eq!(ctx.read(".vscode").as_deref(), Some("not a directory"));
}

/// `--no-editor-settings` leaves `.vscode/` alone.
#[test]
fn without_editor_settings() {
    let ctx = TestContextBuilder::new().build();
    let config = ctx.config_with(RunFlags::default(), false);
    let summary = provision::run(&config, &ctx.context()).unwrap();
    assert_eq!(summary.copied, 5);
    assert!(!ctx.project_file(".vscode").exists());
}

/// Dry run reports decisions but writes nothing.
#[test]
fn dry_run_writes_nothing() {
    let ctx = TestContextBuilder::new()
        .with_project_file("tsconfig.json", "{}\n")
        .build();
    let flags = RunFlags {
        dry_run: true,
        ..RunFlags::default()
    };
    let summary = provision::run(&ctx.config(flags), &ctx.context()).unwrap();
    assert_eq!(summary.copied, 6);
    assert_eq!(summary.skipped, 1);
    assert!(!ctx.project_file(".vscode").exists());
    assert!(ctx.read(".editorconfig").is_none());
    assert_eq!(ctx.read("tsconfig.json").as_deref(), Some("{}\n"));
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Full console transcript of a run over a partially set-up project.
#[test]
fn report_transcript() {
    let ctx = TestContextBuilder::new()
        .with_project_file(".prettierignore", "dist\n")
        .build();
    provision::run(&ctx.config(RunFlags::default()), &ctx.context()).unwrap();
    let visible: Vec<String> = ctx
        .log
        .lines()
        .into_iter()
        .filter(|l| !l.starts_with("debug: "))
        .collect();
    insta::assert_snapshot!(visible.join("\n"), @r"
    stage: Setting up @bagelink/lint-config
    info: skipped .prettierignore (already exists)
    info: copied .editorconfig
    info: copied tsconfig.json
    info: copied tsconfig.app.json
    info: copied tsconfig.node.json
    info: copied settings.json
    info: copied extensions.json
    stage: Setup complete
    info: 6 copied, 0 overwritten, 1 skipped
    info: tip: use --force to overwrite existing files or --upgrade to update from GitHub
    info:   bunx bagel-lint-setup --force
    info:   bunx bagel-lint-setup --upgrade
    ");
}
