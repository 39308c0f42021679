//! Layout XML rewriting.
//!
//! Layout descriptors reference custom views by fully-qualified class name
//! (`<com.example.app.DrawingCanvasView ...>`) and activities via
//! `tools:context=".Activity"`. Both spellings gain the subpackage segment.
//! Like the manifest this is literal substitution keyed off the table, with
//! one twist: fully-qualified names are prefixes of longer class names
//! (`base.Task` is a prefix of `base.TaskAdapter`), so entries are applied
//! longest name first.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::mapping::PackageMap;

/// A pending in-place rewrite of one layout file.
#[derive(Debug)]
pub struct LayoutRewrite {
    pub path: PathBuf,
    pub content: String,
}

/// Compute the rewrites for every `*.xml` under the layout directory.
/// Returns `None` when the directory does not exist (phase skipped); files
/// that need no change are omitted from the result.
pub fn plan_layouts(layout_dir: &Path, map: &PackageMap) -> Result<Option<Vec<LayoutRewrite>>> {
    if !layout_dir.is_dir() {
        return Ok(None);
    }

    let mut rewrites = Vec::new();
    for entry in WalkDir::new(layout_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", layout_dir.display()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("xml") {
            continue;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if let Some(rewritten) = rewrite_layout(&content, map) {
            rewrites.push(LayoutRewrite {
                path: path.to_path_buf(),
                content: rewritten,
            });
        }
    }

    Ok(Some(rewrites))
}

/// Rewrite one layout's content. Returns `None` when nothing matched.
pub fn rewrite_layout(content: &str, map: &PackageMap) -> Option<String> {
    let mut rewritten = content.to_string();
    let mut modified = false;

    // Longest class name first so `base.Task` cannot clobber the prefix of a
    // yet-unprocessed `base.TaskAdapter`.
    let mut entries: Vec<(&str, &str)> = map.iter().collect();
    entries.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));

    for (name, group) in entries {
        let old_ref = format!("{}.{}", map.base(), name);
        let new_ref = format!("{}.{}.{}", map.base(), group, name);
        if rewritten.contains(&old_ref) {
            rewritten = rewritten.replace(&old_ref, &new_ref);
            modified = true;
        }

        let old_ctx = format!("tools:context=\".{}\"", name);
        let new_ctx = format!("tools:context=\".{}.{}\"", group, name);
        if rewritten.contains(&old_ctx) {
            rewritten = rewritten.replace(&old_ctx, &new_ctx);
            modified = true;
        }
    }

    modified.then_some(rewritten)
}

/// Write one rewrite back in place.
pub fn apply_layout(rewrite: &LayoutRewrite) -> Result<()> {
    fs::write(&rewrite.path, &rewrite.content)
        .with_context(|| format!("Failed to write {}", rewrite.path.display()))
}
