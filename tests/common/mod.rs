// Shared helpers for integration tests.
//
// Provides a throwaway project directory and template bundle on the real
// filesystem, a recording executor standing in for the package manager, and a
// recording logger, so each integration test can drive a full provisioning
// run without touching the host.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bagel_lint_setup::config::manifest::{self, Template};
use bagel_lint_setup::config::{Config, RunFlags};
use bagel_lint_setup::context::Context;
use bagel_lint_setup::exec::{ExecResult, Executor};
use bagel_lint_setup::logging::Log;
use bagel_lint_setup::operations::SystemFileSystemOps;

/// Content written for each synthetic template.
pub fn template_content(source: &str) -> String {
    format!("// template: {source}\n")
}

/// Write every built-in template into `dir` with [`template_content`].
pub fn write_bundle(dir: &Path) {
    for t in manifest::builtin() {
        write_file(&dir.join(&t.source), &template_content(&t.source));
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}

/// Path of the templates shipped with the crate.
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// One package-manager invocation seen by [`RecordingExecutor`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// `program arg1 arg2 ...`
    pub command_line: String,
    /// Working directory of the call.
    pub dir: PathBuf,
    /// Number of template destinations present in `dir` when the call was made.
    pub destinations_present: usize,
}

/// [`Executor`] that records calls and exits with a fixed code.
#[derive(Debug)]
pub struct RecordingExecutor {
    code: i32,
    installed: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingExecutor {
    /// Every command exits with `code`.
    pub fn exiting(code: i32) -> Self {
        Self {
            code,
            installed: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// No program is on PATH.
    pub fn not_installed() -> Self {
        Self {
            code: 0,
            installed: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls poisoned").clone()
    }
}

impl Executor for RecordingExecutor {
    fn run_streaming(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
    ) -> anyhow::Result<ExecResult> {
        let destinations_present = manifest::builtin()
            .iter()
            .filter(|t| dir.join(&t.target).exists())
            .count();
        let mut argv = vec![program];
        argv.extend_from_slice(args);
        self.calls.lock().expect("calls poisoned").push(RecordedCall {
            command_line: argv.join(" "),
            dir: dir.to_path_buf(),
            destinations_present,
        });
        Ok(ExecResult {
            success: self.code == 0,
            code: Some(self.code),
        })
    }

    fn which(&self, _program: &str) -> bool {
        self.installed
    }
}

/// [`Log`] that keeps every line, prefixed with its level.
#[derive(Debug, Default)]
pub struct CapturedLog {
    lines: Mutex<Vec<String>>,
}

impl CapturedLog {
    fn push(&self, level: &str, msg: &str) {
        self.lines
            .lock()
            .expect("log poisoned")
            .push(format!("{level}: {msg}"));
    }

    /// All lines in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("log poisoned").clone()
    }

    /// Lines logged at `level`, without the prefix.
    pub fn at(&self, level: &str) -> Vec<String> {
        let prefix = format!("{level}: ");
        self.lines()
            .into_iter()
            .filter_map(|l| l.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }
}

impl Log for CapturedLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
    fn dry_run(&self, msg: &str) {
        self.push("dry_run", msg);
    }
}

/// A throwaway project plus template bundle, both backed by
/// [`tempfile::TempDir`] and deleted on drop.
pub struct IntegrationTestContext {
    /// Project directory files are provisioned into.
    pub project: tempfile::TempDir,
    /// Template bundle.
    pub templates: tempfile::TempDir,
    /// Logger shared with every run.
    pub log: Arc<CapturedLog>,
    /// Package-manager stand-in.
    pub executor: Arc<RecordingExecutor>,
}

impl IntegrationTestContext {
    /// Path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project.path()
    }

    /// Absolute path of `rel` inside the project.
    pub fn project_file(&self, rel: &str) -> PathBuf {
        self.project.path().join(rel)
    }

    /// Read `rel` from the project, or `None` if it does not exist.
    pub fn read(&self, rel: &str) -> Option<String> {
        std::fs::read_to_string(self.project_file(rel)).ok()
    }

    /// Templates the bundle's manifest resolves to.
    pub fn templates_list(&self) -> Vec<Template> {
        manifest::load(self.templates.path()).expect("load manifest")
    }

    /// Config for a run with `flags` and every template group.
    pub fn config(&self, flags: RunFlags) -> Config {
        self.config_with(flags, true)
    }

    /// Config for a run with `flags`, optionally without the editor settings.
    pub fn config_with(&self, flags: RunFlags, include_editor_settings: bool) -> Config {
        Config::new(
            self.project.path().to_path_buf(),
            self.templates.path().to_path_buf(),
            &self.templates_list(),
            include_editor_settings,
            flags,
        )
    }

    /// Context backed by the real filesystem and the recording executor.
    pub fn context(&self) -> Context {
        Context::new(
            Arc::clone(&self.log) as Arc<dyn Log>,
            Arc::clone(&self.executor) as Arc<dyn Executor>,
            Arc::new(SystemFileSystemOps),
        )
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin with an empty project and a complete synthetic bundle.
    pub fn new() -> Self {
        let project = tempfile::tempdir().expect("create project dir");
        let templates = tempfile::tempdir().expect("create templates dir");
        write_bundle(templates.path());
        Self {
            ctx: IntegrationTestContext {
                project,
                templates,
                log: Arc::new(CapturedLog::default()),
                executor: Arc::new(RecordingExecutor::exiting(0)),
            },
        }
    }

    /// Write `content` to `rel` inside the project.
    pub fn with_project_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.project.path().join(rel), content);
        self
    }

    /// Pre-populate every destination with `content`.
    pub fn with_all_destinations(self, content: &str) -> Self {
        for t in manifest::builtin() {
            write_file(&self.ctx.project.path().join(&t.target), content);
        }
        self
    }

    /// Replace a template's content.
    pub fn with_template(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.templates.path().join(rel), content);
        self
    }

    /// Remove a template from the bundle.
    pub fn without_template(self, rel: &str) -> Self {
        std::fs::remove_file(self.ctx.templates.path().join(rel)).expect("remove template");
        self
    }

    /// Use `executor` in place of the default always-succeeding one.
    pub fn with_executor(mut self, executor: RecordingExecutor) -> Self {
        self.ctx.executor = Arc::new(executor);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
