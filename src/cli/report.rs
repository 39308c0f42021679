//! Report formatting and printing utilities.
//!
//! Prints the phase-by-phase outcome of a run, per root: units moved,
//! skipped, malformed, imports injected, and the dependent-artifact
//! rewrites. Separate from the engine so repkg can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    ArtifactOutcome, CommandResult, CommandSummary, InitSummary, MigrateSummary, RootReport,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command's result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Migrate(summary) => print_migrate(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn print_migrate<W: Write>(summary: &MigrateSummary, verbose: bool, writer: &mut W) {
    for root in &summary.roots {
        print_root(root, verbose, writer);
    }

    let moved: usize = summary.roots.iter().map(|r| r.moved).sum();
    let skipped: usize = summary.roots.iter().map(|r| r.skipped.len()).sum();
    let malformed: usize = summary.roots.iter().map(|r| r.malformed.len()).sum();

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Moved {} {} across {} {}",
                moved,
                if moved == 1 { "unit" } else { "units" },
                summary.roots.len(),
                if summary.roots.len() == 1 {
                    "root"
                } else {
                    "roots"
                }
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} dry run - no files were written (use {} to migrate)",
            "note:".bold(),
            "--apply".cyan()
        );
    }

    let problems = skipped + malformed;
    if problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} skipped, {} malformed)",
            FAILURE_MARK.red(),
            problems,
            if problems == 1 { "problem" } else { "problems" },
            skipped,
            malformed
        );
    }
}

fn print_root<W: Write>(root: &RootReport, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "Root:".bold(), root.java_dir.display());

    let _ = writeln!(
        writer,
        "  moved {} {}, {} already in place",
        root.moved,
        if root.moved == 1 { "unit" } else { "units" },
        root.already_in_place
    );
    let _ = writeln!(
        writer,
        "  injected imports into {} {}",
        root.imports_updated,
        if root.imports_updated == 1 {
            "file"
        } else {
            "files"
        }
    );

    for name in &root.skipped {
        let _ = writeln!(
            writer,
            "  {} \"{}\" not found on disk  {}",
            "warning:".bold().yellow(),
            name,
            "missing-unit".dimmed().cyan()
        );
    }
    for name in &root.malformed {
        let _ = writeln!(
            writer,
            "  {} \"{}\" has no package declaration  {}",
            "warning:".bold().yellow(),
            name,
            "malformed-unit".dimmed().cyan()
        );
    }

    print_artifact("manifest", &root.manifest, "entries", verbose, writer);
    print_artifact("layouts", &root.layouts, "files", verbose, writer);
    let _ = writeln!(writer);
}

fn print_artifact<W: Write>(
    label: &str,
    outcome: &ArtifactOutcome,
    unit: &str,
    verbose: bool,
    writer: &mut W,
) {
    match outcome {
        ArtifactOutcome::NotConfigured => {
            if verbose {
                let _ = writeln!(writer, "  {}: not configured", label);
            }
        }
        ArtifactOutcome::Missing(path) => {
            let _ = writeln!(
                writer,
                "  {} {}: skipped, not found: {}  {}",
                "warning:".bold().yellow(),
                label,
                path.display(),
                "missing-artifact".dimmed().cyan()
            );
        }
        ArtifactOutcome::Rewritten { changed } => {
            let _ = writeln!(writer, "  {}: {} {} updated", label, changed, unit);
        }
    }
}
