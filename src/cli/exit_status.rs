use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for batch
/// rewrite tools.
///
/// - `Success` (0): Command completed, nothing was skipped or malformed
/// - `Failure` (1): Command completed but some units were skipped or lacked
///   a package declaration
/// - `Error` (2): Command failed due to internal error (config error, I/O
///   failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
