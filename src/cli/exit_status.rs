use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; a failed `msgfmt` invocation still
///   counts as success since the text catalog was written.
/// - `Error` (1): Command failed due to an internal error (missing template,
///   unreadable source file, config error, etc.).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
