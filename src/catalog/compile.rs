//! Binary catalog compilation via the external `msgfmt` collaborator.

use std::path::Path;
use std::process::Command;

pub const COMPILER: &str = "msgfmt";

/// Outcome of the compiler invocation. Failure carries a printable reason;
/// the caller reports it and keeps going, since the PO file is already
/// written either way.
#[derive(Debug)]
pub enum CompileOutcome {
    Compiled,
    Failed(String),
}

/// Run `msgfmt <po> -o <mo>`. A missing executable or non-zero exit is
/// captured in the outcome, never propagated as an error.
pub fn compile_catalog(po_path: &Path, mo_path: &Path) -> CompileOutcome {
    match Command::new(COMPILER)
        .arg(po_path)
        .arg("-o")
        .arg(mo_path)
        .status()
    {
        Ok(status) if status.success() => CompileOutcome::Compiled,
        Ok(status) => CompileOutcome::Failed(format!("{COMPILER} exited with {status}")),
        Err(err) => CompileOutcome::Failed(format!("failed to run {COMPILER}: {err}")),
    }
}
