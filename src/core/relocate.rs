//! The relocation driver: moves units into their subpackage directories and
//! injects the cross-package imports the move makes necessary.
//!
//! A run over one source root is two strictly ordered phases. Phase 1
//! resolves every table entry to its relocated state (reading the flat file
//! and rewriting its package declaration). Phase 2 scans the completed set
//! and injects imports - it must not start before phase 1 has covered the
//! whole root, because the scan assumes every class already sits at its final
//! package. Both phases are computed in memory first so that a dry run can
//! report the exact outcome without touching disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::imports::{InsertOutcome, insert_imports};
use super::mapping::PackageMap;
use super::scan::scan_references;
use super::strip::strip_for_analysis;

/// A unit resolved to its relocated state.
#[derive(Debug)]
pub struct RelocatedUnit {
    pub name: String,
    pub group: String,
    /// Flat-location file to delete, `None` when the unit was already found
    /// at its target (a previous run moved it).
    pub source: Option<PathBuf>,
    pub target: PathBuf,
    /// Final content: package declaration rewritten, imports injected.
    pub content: String,
    /// Whether `content` differs from what is on disk at `target`.
    pub dirty: bool,
    /// Whether the import pass changed this unit.
    pub imports_injected: bool,
}

/// Everything a migration would do to one source root.
#[derive(Debug)]
pub struct RelocationPlan {
    pub units: Vec<RelocatedUnit>,
    /// Table entries with no file at either the flat or the target path.
    pub skipped: Vec<String>,
    /// Units without a recognizable package declaration; imports could not
    /// be anchored for them.
    pub malformed: Vec<String>,
    /// Group directories to ensure before writing.
    pub group_dirs: Vec<PathBuf>,
}

impl RelocationPlan {
    pub fn moved(&self) -> usize {
        self.units.iter().filter(|u| u.source.is_some()).count()
    }

    pub fn already_in_place(&self) -> usize {
        self.units.iter().filter(|u| u.source.is_none()).count()
    }

    pub fn imports_updated(&self) -> usize {
        self.units.iter().filter(|u| u.imports_injected).count()
    }
}

/// Compute the full relocation of one root, in memory.
pub fn plan_relocation(java_dir: &Path, map: &PackageMap) -> Result<RelocationPlan> {
    let mut units = Vec::new();
    let mut skipped = Vec::new();

    // Phase 1: resolve each unit, rewriting its own package declaration.
    let old_decl = format!("package {};", map.base());
    for (name, group) in map.iter() {
        let flat = java_dir.join(format!("{}.java", name));
        let target = java_dir.join(group).join(format!("{}.java", name));

        if flat.is_file() {
            let content = fs::read_to_string(&flat)
                .with_context(|| format!("Failed to read {}", flat.display()))?;
            let new_decl = format!("package {}.{};", map.base(), group);
            let content = content.replacen(&old_decl, &new_decl, 1);
            units.push(RelocatedUnit {
                name: name.to_string(),
                group: group.to_string(),
                source: Some(flat),
                target,
                content,
                dirty: true,
                imports_injected: false,
            });
        } else if target.is_file() {
            // Already relocated by an earlier run; still gets the import
            // pass so the whole pipeline stays idempotent.
            let content = fs::read_to_string(&target)
                .with_context(|| format!("Failed to read {}", target.display()))?;
            units.push(RelocatedUnit {
                name: name.to_string(),
                group: group.to_string(),
                source: None,
                target,
                content,
                dirty: false,
                imports_injected: false,
            });
        } else {
            skipped.push(name.to_string());
        }
    }

    // Phase 2: reference scan over the fully relocated set.
    let mut malformed = Vec::new();
    for unit in &mut units {
        let analysis = strip_for_analysis(&unit.content);
        let refs = scan_references(&analysis, &unit.name, &unit.group, map);
        let wanted: BTreeSet<String> = refs.iter().map(|r| r.import_line(map.base())).collect();
        if wanted.is_empty() {
            continue;
        }
        match insert_imports(&unit.content, &wanted) {
            InsertOutcome::Updated(content) => {
                unit.content = content;
                unit.dirty = true;
                unit.imports_injected = true;
            }
            InsertOutcome::Unchanged => {}
            InsertOutcome::NoPackageAnchor => malformed.push(unit.name.clone()),
        }
    }

    let group_dirs = map.groups().into_iter().map(|g| java_dir.join(g)).collect();

    Ok(RelocationPlan {
        units,
        skipped,
        malformed,
        group_dirs,
    })
}

/// Write a plan to disk: ensure group directories, then per unit write the
/// final content at the target and remove the flat copy.
pub fn apply_relocation(plan: &RelocationPlan) -> Result<()> {
    for dir in &plan.group_dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    for unit in &plan.units {
        if unit.dirty {
            fs::write(&unit.target, &unit.content)
                .with_context(|| format!("Failed to write {}", unit.target.display()))?;
        }
        if let Some(source) = &unit.source {
            fs::remove_file(source)
                .with_context(|| format!("Failed to remove {}", source.display()))?;
        }
    }

    Ok(())
}
