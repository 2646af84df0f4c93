use std::path::PathBuf;

use crate::catalog::compile::CompileOutcome;

pub mod extract;
pub mod translate;

/// What a command did, handed to the reporter for printing.
pub enum CommandSummary {
    Extract(ExtractSummary),
    Translate(TranslateSummary),
    Init(InitSummary),
}

pub struct ExtractSummary {
    pub files_scanned: usize,
    pub strings_found: usize,
    pub pot_path: PathBuf,
}

pub struct TranslateSummary {
    pub entries_translated: usize,
    pub po_path: PathBuf,
    pub mo_path: PathBuf,
    pub compile: CompileOutcome,
}

pub struct InitSummary {
    pub created: bool,
}
