use std::path::PathBuf;

use anyhow::{Result, ensure};

use super::super::args::MigrateCommand;
use super::{ArtifactOutcome, CommandResult, CommandSummary, MigrateSummary, RootReport};
use crate::config::{CONFIG_FILE_NAME, Config, RootConfig};
use crate::core::PackageMap;
use crate::core::layout::apply_layout;
use crate::core::manifest::apply_manifest;
use crate::core::relocate::apply_relocation;
use crate::core::{layout, manifest, relocate};

/// Run the migration pipeline over every configured root.
///
/// Per root the full outcome is planned in memory first; with `--apply` the
/// plans are then written in order (relocation, manifest, layouts). Without
/// it the command only reports what would change.
pub fn migrate(cmd: MigrateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config_path = args
        .common
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let config = Config::load(&config_path)?;
    let map = config.package_map()?;

    let mut roots = Vec::new();
    let mut skipped_units = 0;
    let mut malformed_units = 0;

    for root in &config.roots {
        let report = migrate_root(root, &map, args.apply)?;
        skipped_units += report.skipped.len();
        malformed_units += report.malformed.len();
        roots.push(report);
    }

    Ok(CommandResult {
        summary: CommandSummary::Migrate(MigrateSummary {
            roots,
            is_apply: args.apply,
        }),
        skipped_units,
        malformed_units,
    })
}

fn migrate_root(root: &RootConfig, map: &PackageMap, apply: bool) -> Result<RootReport> {
    ensure!(
        root.java_dir.is_dir(),
        "Java source directory not found: {}",
        root.java_dir.display()
    );

    let relocation = relocate::plan_relocation(&root.java_dir, map)?;

    let manifest_plan = match &root.manifest {
        None => None,
        Some(path) => Some((path.clone(), manifest::plan_manifest(path, map)?)),
    };

    let layout_plan = match &root.layout_dir {
        None => None,
        Some(dir) => Some((dir.clone(), layout::plan_layouts(dir, map)?)),
    };

    if apply {
        apply_relocation(&relocation)?;
        if let Some((_, Some(rewrite))) = &manifest_plan
            && rewrite.entries_changed > 0
        {
            apply_manifest(rewrite)?;
        }
        if let Some((_, Some(rewrites))) = &layout_plan {
            for rewrite in rewrites {
                apply_layout(rewrite)?;
            }
        }
    }

    let manifest_outcome = match manifest_plan {
        None => ArtifactOutcome::NotConfigured,
        Some((path, None)) => ArtifactOutcome::Missing(path),
        Some((_, Some(rewrite))) => ArtifactOutcome::Rewritten {
            changed: rewrite.entries_changed,
        },
    };

    let layout_outcome = match layout_plan {
        None => ArtifactOutcome::NotConfigured,
        Some((dir, None)) => ArtifactOutcome::Missing(dir),
        Some((_, Some(rewrites))) => ArtifactOutcome::Rewritten {
            changed: rewrites.len(),
        },
    };

    Ok(RootReport {
        java_dir: root.java_dir.clone(),
        moved: relocation.moved(),
        already_in_place: relocation.already_in_place(),
        imports_updated: relocation.imports_updated(),
        skipped: relocation.skipped,
        malformed: relocation.malformed,
        manifest: manifest_outcome,
        layouts: layout_outcome,
    })
}
