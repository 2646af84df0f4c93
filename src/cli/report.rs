//! Summary printing for completed commands.

use colored::Colorize;

use super::commands::{CommandSummary, ExtractSummary, InitSummary, TranslateSummary};
use crate::catalog::compile::CompileOutcome;
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(summary: &CommandSummary) {
    match summary {
        CommandSummary::Extract(summary) => print_extract(summary),
        CommandSummary::Translate(summary) => print_translate(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_extract(summary: &ExtractSummary) {
    println!(
        "Found {} unique translatable strings in {} files.",
        summary.strings_found, summary.files_scanned
    );
    println!(
        "{} POT file generated: {}",
        SUCCESS_MARK.green(),
        summary.pot_path.display()
    );
}

fn print_translate(summary: &TranslateSummary) {
    println!("Translated {} entries.", summary.entries_translated);
    println!(
        "{} Created {}",
        SUCCESS_MARK.green(),
        summary.po_path.display()
    );
    match &summary.compile {
        CompileOutcome::Compiled => {
            println!(
                "{} Compiled to {}",
                SUCCESS_MARK.green(),
                summary.mo_path.display()
            );
        }
        CompileOutcome::Failed(reason) => {
            eprintln!(
                "{} could not compile MO catalog: {}",
                "warning:".bold().yellow(),
                reason
            );
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
    }
}
