use std::path::Path;

use anyhow::Result;

use super::{CommandSummary, ExtractSummary};
use crate::catalog::pot;
use crate::cli::args::ExtractCommand;
use crate::config::{self, Config};
use crate::extract::{collect_strings, scanner};

pub fn extract(cmd: ExtractCommand) -> Result<CommandSummary> {
    let mut config = config::load_config(Path::new("."))?;
    apply_overrides(&mut config, &cmd);

    let files = scanner::scan_files(Path::new(&config.source_root), &config.ignores);
    println!("Scanning {} PHP files...", files.len());
    if cmd.common.verbose {
        for file in &files {
            println!("  {}", file.display());
        }
    }

    let strings = collect_strings(&files, &config)?;

    let pot_path = config.pot_path();
    pot::write_pot(&strings, &config.project_id, &pot_path)?;

    Ok(CommandSummary::Extract(ExtractSummary {
        files_scanned: files.len(),
        strings_found: strings.len(),
        pot_path,
    }))
}

fn apply_overrides(config: &mut Config, cmd: &ExtractCommand) {
    if let Some(source_root) = &cmd.common.source_root {
        config.source_root = source_root.to_string_lossy().into_owned();
    }
    if let Some(languages_dir) = &cmd.common.languages_dir {
        config.languages_dir = languages_dir.to_string_lossy().into_owned();
    }
}
