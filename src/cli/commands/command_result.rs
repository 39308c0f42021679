use std::path::PathBuf;

use crate::cli::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Migrate(MigrateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MigrateSummary {
    pub roots: Vec<RootReport>,
    pub is_apply: bool,
}

/// Per-root, per-phase outcome of a migration run.
#[derive(Debug)]
pub struct RootReport {
    pub java_dir: PathBuf,
    pub moved: usize,
    pub already_in_place: usize,
    /// Units listed in the table but absent from disk.
    pub skipped: Vec<String>,
    /// Units without a recognizable package declaration.
    pub malformed: Vec<String>,
    /// Files that gained import statements.
    pub imports_updated: usize,
    pub manifest: ArtifactOutcome,
    pub layouts: ArtifactOutcome,
}

/// Outcome of rewriting a dependent artifact (manifest or layout dir).
#[derive(Debug)]
pub enum ArtifactOutcome {
    /// The config did not name this artifact for the root.
    NotConfigured,
    /// Named in the config but not found on disk; phase skipped.
    Missing(PathBuf),
    /// Rewritten (or would be, in a dry run). For the manifest `changed`
    /// counts entries, for layouts it counts files.
    Rewritten { changed: usize },
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a repkg command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Total units skipped across all roots.
    pub skipped_units: usize,
    /// Total malformed units across all roots.
    pub malformed_units: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.skipped_units + self.malformed_units > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
