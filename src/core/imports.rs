//! Import synthesis and insertion.
//!
//! Converts the scanner's reference set into `import` lines and splices the
//! missing ones into a unit's content, anchored on its package declaration.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static IMPORT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^import [^;]+;").unwrap());

static PACKAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^package [^;]+;[ \t]*\r?\n?").unwrap());

/// Outcome of inserting import statements into a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Missing imports were inserted after the package declaration.
    Updated(String),
    /// Everything requested was already present; nothing to write.
    Unchanged,
    /// No package declaration to anchor on; the unit is left untouched and
    /// should be reported as malformed.
    NoPackageAnchor,
}

/// Insert the members of `wanted` that are not already present, immediately
/// after the package declaration.
///
/// Already-present imports are found by exact line match, so insertion is
/// idempotent. New imports go in as a contiguous block in lexicographic
/// order, separated from the package line by exactly one blank line; all
/// following content is preserved byte for byte.
pub fn insert_imports(content: &str, wanted: &BTreeSet<String>) -> InsertOutcome {
    let present: BTreeSet<&str> = IMPORT_LINE
        .find_iter(content)
        .map(|m| m.as_str())
        .collect();

    let to_add: Vec<&str> = wanted
        .iter()
        .map(String::as_str)
        .filter(|import| !present.contains(*import))
        .collect();

    if to_add.is_empty() {
        return InsertOutcome::Unchanged;
    }

    let Some(anchor) = PACKAGE_LINE.find(content) else {
        return InsertOutcome::NoPackageAnchor;
    };

    let mut block = String::new();
    block.push('\n');
    for import in &to_add {
        block.push_str(import);
        block.push('\n');
    }

    let mut updated = String::with_capacity(content.len() + block.len());
    updated.push_str(&content[..anchor.end()]);
    updated.push_str(&block);
    updated.push_str(&content[anchor.end()..]);

    InsertOutcome::Updated(updated)
}
