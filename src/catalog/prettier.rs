//! Formatter options shared by every project.
use serde::Serialize;

/// Where trailing commas are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// Wherever the syntax allows.
    All,
    /// Where valid in ES5 (objects, arrays).
    Es5,
    /// Never.
    None,
}

/// Parentheses around a sole arrow-function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    /// `(x) => x`
    Always,
    /// `x => x`
    Avoid,
}

/// Line ending written by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
    /// Keep whatever the file uses.
    Auto,
}

/// Formatter options, serialised with the formatter's own key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierOptions {
    print_width: u32,
    single_quote: bool,
    semi: bool,
    trailing_comma: TrailingComma,
    arrow_parens: ArrowParens,
    end_of_line: EndOfLine,
    tab_width: u32,
    use_tabs: bool,
    vue_indent_script_and_style: bool,
}

/// The shared preset.
#[must_use]
pub const fn preset() -> PrettierOptions {
    PrettierOptions {
        print_width: 100,
        single_quote: true,
        semi: false,
        trailing_comma: TrailingComma::All,
        arrow_parens: ArrowParens::Always,
        end_of_line: EndOfLine::Lf,
        tab_width: 2,
        use_tabs: false,
        vue_indent_script_and_style: false,
    }
}
