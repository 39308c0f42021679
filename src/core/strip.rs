//! Lexical stripping of Java sources for reference scanning.
//!
//! The reference scanner works on plain text, so a class name mentioned in a
//! comment or inside a string literal must not count as a reference. This
//! module produces an "analysis view" of a unit with those regions elided.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap());

/// Remove comments and string-literal bodies from a unit's text.
///
/// The result has the same line count as the input: newlines spanned by a
/// block comment are kept, line comments stop before the newline, and string
/// literals collapse to `""` so surrounding structure stays intact.
///
/// Block comments are stripped first; a comment containing an unterminated
/// quote must not corrupt the string pass. Stripping is total and never
/// fails - malformed syntax degrades silently, since this view is only
/// advisory input for the scanner.
pub fn strip_for_analysis(text: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(text, |caps: &Captures| {
        caps[0].chars().filter(|&c| c == '\n').collect::<String>()
    });
    let text = LINE_COMMENT.replace_all(&text, "");
    STRING_LITERAL.replace_all(&text, "\"\"").into_owned()
}
