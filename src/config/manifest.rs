//! Template manifest: which bundled files go where in the project.
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Component, Path};

use crate::error::SetupError;

/// File name of the optional manifest inside the templates directory.
pub const MANIFEST_FILE: &str = "manifest.toml";

/// Which part of the bundle a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Ignore files, editorconfig and compiler configs.
    Base,
    /// Editor settings under `.vscode/`.
    EditorSettings,
}

/// One template: path inside the bundle and path inside the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Relative path under the templates directory.
    pub source: String,
    /// Relative path under the project directory.
    pub target: String,
    /// Bundle group, used by `--no-editor-settings`.
    pub group: Group,
}

impl Template {
    fn new(source: &str, target: &str, group: Group) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            group,
        }
    }
}

/// The built-in template list, used when the bundle has no manifest.
#[must_use]
pub fn builtin() -> Vec<Template> {
    vec![
        Template::new("prettier/.prettierignore", ".prettierignore", Group::Base),
        Template::new("editorconfig/.editorconfig", ".editorconfig", Group::Base),
        Template::new("tsconfig/tsconfig.json", "tsconfig.json", Group::Base),
        Template::new("tsconfig/tsconfig.app.json", "tsconfig.app.json", Group::Base),
        Template::new("tsconfig/tsconfig.node.json", "tsconfig.node.json", Group::Base),
        Template::new("vscode/settings.json", ".vscode/settings.json", Group::EditorSettings),
        Template::new("vscode/extensions.json", ".vscode/extensions.json", Group::EditorSettings),
    ]
}

/// A single entry in a manifest section: either a path that is the same in
/// the bundle and the project, or an explicit `{ source, target }` pair.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    /// Plain string: `"tsconfig.json"`.
    Simple(String),
    /// Structured: `{ source = "vscode/settings.json", target = ".vscode/settings.json" }`.
    WithTarget { source: String, target: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Section {
    #[serde(default)]
    files: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    base: Section,
    #[serde(default, rename = "editor-settings")]
    editor_settings: Section,
}

/// Parse manifest text into templates, base group first.
///
/// # Errors
///
/// Returns an error if the TOML is malformed, has unknown sections, or any
/// path is absolute or climbs out of its directory.
pub fn parse(content: &str) -> Result<Vec<Template>> {
    let file: ManifestFile = toml::from_str(content).context("parsing TOML")?;

    let mut templates = Vec::new();
    for (section, group) in [
        (file.base, Group::Base),
        (file.editor_settings, Group::EditorSettings),
    ] {
        for entry in section.files {
            let (source, target) = match entry {
                ManifestEntry::Simple(path) => (path.clone(), path),
                ManifestEntry::WithTarget { source, target } => (source, target),
            };
            ensure_relative(&source)?;
            ensure_relative(&target)?;
            templates.push(Template {
                source,
                target,
                group,
            });
        }
    }
    Ok(templates)
}

/// Load the manifest from `templates_dir`, falling back to [`builtin`] when
/// the directory has none.
///
/// # Errors
///
/// Returns [`SetupError::Manifest`] if the manifest exists but cannot be read
/// or parsed.
pub fn load(templates_dir: &Path) -> Result<Vec<Template>, SetupError> {
    let path = templates_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(builtin());
    }
    std::fs::read_to_string(&path)
        .context("reading manifest")
        .and_then(|content| parse(&content))
        .map_err(|e| SetupError::Manifest {
            path,
            message: format!("{e:#}"),
        })
}

fn ensure_relative(path: &str) -> Result<()> {
    let p = Path::new(path);
    if path.is_empty()
        || p.components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        anyhow::bail!("'{path}' must be a relative path inside its directory");
    }
    Ok(())
}
