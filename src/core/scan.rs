//! Cross-package reference scanning.
//!
//! Given the stripped analysis view of a unit, decide which other relocated
//! classes it references and therefore which imports it will need.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::mapping::PackageMap;

/// A reference discovered in a unit's analysis view.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClassRef {
    /// One of the fixed build-generated symbols (`R`, `BuildConfig`). These
    /// stay directly under the base package and need an import from every
    /// subpackage that uses them.
    Generated(&'static str),
    /// A class relocated into another subpackage.
    Class { name: String, group: String },
}

impl ClassRef {
    /// The import statement that qualifies this reference.
    pub fn import_line(&self, base_package: &str) -> String {
        match self {
            ClassRef::Generated(name) => format!("import {}.{};", base_package, name),
            ClassRef::Class { name, group } => {
                format!("import {}.{}.{};", base_package, group, name)
            }
        }
    }
}

static R_USAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bR\.").unwrap());

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Scan an analysis view for references to classes in other subpackages.
///
/// Matching is whole-word and purely textual: a co-occurrence of a mapped
/// class name counts as a dependency, with no notion of call sites or
/// shadowing. This over-approximates on purpose - a spurious import is
/// harmless, a missing one breaks the build. Same-group and self references
/// are excluded since they need no qualification.
pub fn scan_references(
    analysis: &str,
    unit_name: &str,
    unit_group: &str,
    map: &PackageMap,
) -> BTreeSet<ClassRef> {
    let mut refs = BTreeSet::new();

    // `R.layout`, `R.id` etc. - scoped member access, so the token must be
    // followed by a dot.
    if R_USAGE.is_match(analysis) {
        refs.insert(ClassRef::Generated("R"));
    }

    let words: HashSet<&str> = WORD.find_iter(analysis).map(|m| m.as_str()).collect();

    if words.contains("BuildConfig") {
        refs.insert(ClassRef::Generated("BuildConfig"));
    }

    for (name, group) in map.iter() {
        if group == unit_group || name == unit_name {
            continue;
        }
        if words.contains(name) {
            refs.insert(ClassRef::Class {
                name: name.to_string(),
                group: group.to_string(),
            });
        }
    }

    refs
}
