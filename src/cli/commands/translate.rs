use std::path::Path;

use anyhow::Result;

use super::{CommandSummary, TranslateSummary};
use crate::catalog::{apply, compile};
use crate::cli::args::TranslateCommand;
use crate::config::{self, TARGET_LOCALE};

pub fn translate(cmd: TranslateCommand) -> Result<CommandSummary> {
    let mut config = config::load_config(Path::new("."))?;
    if let Some(languages_dir) = &cmd.common.languages_dir {
        config.languages_dir = languages_dir.to_string_lossy().into_owned();
    }

    let template_path = cmd.template.unwrap_or_else(|| config.pot_path());
    let po_path = config.po_path();
    let mo_path = config.mo_path();

    println!("Applying translations...");
    let applied = apply::apply_file(&template_path, &po_path, TARGET_LOCALE)?;

    let compile = compile::compile_catalog(&po_path, &mo_path);

    Ok(CommandSummary::Translate(TranslateSummary {
        entries_translated: applied.entries_translated,
        po_path,
        mo_path,
        compile,
    }))
}
