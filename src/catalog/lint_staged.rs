//! Pre-commit hook table: glob to commands run on staged files.
use std::collections::BTreeMap;

/// Commands keyed by staged-file glob.
pub type HookTable = BTreeMap<&'static str, Vec<&'static str>>;

/// Script files are linted then formatted; everything else is only formatted.
#[must_use]
pub fn preset() -> HookTable {
    BTreeMap::from([
        (
            "*.{js,mjs,cjs,ts,mts,cts,vue}",
            vec!["eslint --fix", "prettier --write"],
        ),
        ("*.{json,md,html,css,scss}", vec!["prettier --write"]),
    ])
}
