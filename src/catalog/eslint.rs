//! Lint rules for Vue 3 + TypeScript projects, as flat-config blocks.
//!
//! Blocks are applied in order; later blocks override earlier ones for the
//! files they match. Shared presets from plugins appear as named references
//! since their contents belong to the plugin, not to this table.
use serde::ser::{SerializeMap as _, SerializeSeq as _};
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Rule severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule disabled.
    Off,
    /// Reported, does not fail the lint run.
    Warn,
    /// Reported and fails the lint run.
    Error,
}

/// A rule setting: severity plus optional rule-specific options.
///
/// Serialises as a bare severity (`"error"`) when there are no options, and
/// as `["error", ...options]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    severity: Severity,
    options: Vec<Value>,
}

impl Rule {
    /// Rule with no options.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    /// Append a rule option.
    #[must_use]
    pub fn with(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }

    /// Configured severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rules(Vec<(&'static str, Rule)>);

impl Rules {
    fn set(mut self, name: &'static str, rule: Rule) -> Self {
        self.0.push((name, rule));
        self
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, r)| r)
    }

    /// Number of configured rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no rules are configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Rules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, rule) in &self.0 {
            map.serialize_entry(name, rule)?;
        }
        map.end()
    }
}

/// Parser settings for a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    ecma_version: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_type: Option<&'static str>,
    parser: &'static str,
    parser_options: Value,
}

/// One configuration block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Globs the block applies to; empty means every file.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<&'static str>,
    /// Plugin namespaces registered by the block.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<&'static str>,
    /// Parser settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<LanguageOptions>,
    /// Rule settings.
    #[serde(skip_serializing_if = "Rules::is_empty")]
    pub rules: Rules,
    /// Globs excluded from linting entirely.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<&'static str>,
}

/// An entry of the flat config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    /// A preset shipped by a plugin, referenced by name.
    Shared(&'static str),
    /// A block defined here.
    Block(Block),
}

const ALL_SOURCES: &str = "**/*.{js,mjs,cjs,ts,tsx,vue}";
const TYPED_SOURCES: &str = "**/*.{ts,tsx,vue}";
const VUE_PARSER: &str = "vue-eslint-parser";
const TS_PARSER: &str = "@typescript-eslint/parser";

fn parser_block() -> Block {
    Block {
        files: vec![ALL_SOURCES],
        language_options: Some(LanguageOptions {
            ecma_version: Some("latest"),
            source_type: Some("module"),
            parser: VUE_PARSER,
            parser_options: json!({
                "ecmaVersion": "latest",
                "sourceType": "module",
                "parser": TS_PARSER,
                "extraFileExtensions": [".vue"]
            }),
        }),
        ..Block::default()
    }
}

fn typescript_block() -> Block {
    use Severity::{Error, Off, Warn};

    let unused = json!({
        "argsIgnorePattern": "^_",
        "varsIgnorePattern": "^_",
        "caughtErrorsIgnorePattern": "^_"
    });

    Block {
        files: vec![TYPED_SOURCES],
        plugins: vec!["@typescript-eslint"],
        // project: null keeps linting syntactic; type-aware rules are opt-in.
        language_options: Some(LanguageOptions {
            ecma_version: None,
            source_type: None,
            parser: VUE_PARSER,
            parser_options: json!({
                "parser": TS_PARSER,
                "project": null,
                "extraFileExtensions": [".vue"]
            }),
        }),
        rules: Rules::default()
            .set("@typescript-eslint/no-unused-vars", Rule::new(Error).with(unused))
            .set("@typescript-eslint/no-explicit-any", Rule::new(Warn))
            .set("@typescript-eslint/no-non-null-assertion", Rule::new(Warn))
            .set("@typescript-eslint/no-unused-expressions", Rule::new(Error))
            .set(
                "@typescript-eslint/consistent-type-imports",
                Rule::new(Error).with(json!({ "prefer": "type-imports", "fixable": "code" })),
            )
            .set("no-unused-vars", Rule::new(Off))
            .set("no-unused-expressions", Rule::new(Off)),
        ..Block::default()
    }
}

fn quality_block() -> Block {
    use Severity::{Error, Off, Warn};

    Block {
        files: vec![ALL_SOURCES],
        rules: Rules::default()
            .set("prefer-const", Rule::new(Error))
            .set("no-debugger", Rule::new(Error))
            .set("no-console", Rule::new(Warn))
            .set("no-var", Rule::new(Error))
            .set("no-undef", Rule::new(Error))
            .set(
                "eqeqeq",
                Rule::new(Error)
                    .with(json!("always"))
                    .with(json!({ "null": "ignore" })),
            )
            .set("no-constant-condition", Rule::new(Error))
            .set("no-duplicate-imports", Rule::new(Error))
            // <script setup> components
            .set("vue/multi-word-component-names", Rule::new(Off))
            .set("vue/require-default-prop", Rule::new(Off))
            .set("vue/no-v-html", Rule::new(Warn))
            // template layout is the formatter's job
            .set("vue/max-attributes-per-line", Rule::new(Off))
            .set("vue/singleline-html-element-content-newline", Rule::new(Off))
            .set("vue/html-self-closing", Rule::new(Off))
            .set("vue/html-indent", Rule::new(Off)),
        ..Block::default()
    }
}

fn ignore_block() -> Block {
    Block {
        ignores: vec![
            "**/node_modules/**",
            "**/dist/**",
            "**/build/**",
            "**/.nuxt/**",
            "**/.output/**",
            "**/coverage/**",
            "**/.vscode/**",
            "**/.idea/**",
        ],
        ..Block::default()
    }
}

/// The full flat config, in application order.
#[must_use]
pub fn preset() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::Shared("@eslint/js:recommended"),
        ConfigEntry::Shared("eslint-plugin-vue:flat/recommended"),
        ConfigEntry::Shared("eslint-config-prettier"),
        ConfigEntry::Block(parser_block()),
        ConfigEntry::Block(typescript_block()),
        ConfigEntry::Block(quality_block()),
        ConfigEntry::Block(ignore_block()),
    ]
}
