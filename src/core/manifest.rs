//! AndroidManifest.xml rewriting.
//!
//! Components are registered by class name relative to the base package
//! (`android:name=".MainActivity"`). After relocation those names must carry
//! the subpackage. A literal substitution per table entry is enough here:
//! the manifest needs corrected spellings, not new declarations, and the old
//! pattern no longer occurs after the first pass, so the rewrite is
//! idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::mapping::PackageMap;

/// A pending in-place rewrite of the manifest.
#[derive(Debug)]
pub struct ManifestRewrite {
    pub path: PathBuf,
    pub content: String,
    pub entries_changed: usize,
}

/// Compute the manifest rewrite. Returns `None` when the manifest does not
/// exist; a missing artifact skips the phase, it is not an error.
pub fn plan_manifest(path: &Path, map: &PackageMap) -> Result<Option<ManifestRewrite>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (content, entries_changed) = rewrite_manifest(&content, map);

    Ok(Some(ManifestRewrite {
        path: path.to_path_buf(),
        content,
        entries_changed,
    }))
}

/// Rewrite `android:name` references to their group-qualified form.
///
/// Covers the plain form `android:name=".Class"` and the single-level
/// nested-type form `android:name=".Class$Inner"`, where the prefix up to
/// the outer class gets qualified.
pub fn rewrite_manifest(content: &str, map: &PackageMap) -> (String, usize) {
    let mut content = content.to_string();
    let mut changes = 0;

    for (name, group) in map.iter() {
        let old = format!("android:name=\".{}\"", name);
        let new = format!("android:name=\".{}.{}\"", group, name);
        if content.contains(&old) {
            content = content.replace(&old, &new);
            changes += 1;
        }

        let old_nested = format!("android:name=\".{}$", name);
        let new_nested = format!("android:name=\".{}.{}$", group, name);
        if content.contains(&old_nested) {
            content = content.replace(&old_nested, &new_nested);
            changes += 1;
        }
    }

    (content, changes)
}

/// Write the rewrite back in place.
pub fn apply_manifest(rewrite: &ManifestRewrite) -> Result<()> {
    fs::write(&rewrite.path, &rewrite.content)
        .with_context(|| format!("Failed to write {}", rewrite.path.display()))
}
