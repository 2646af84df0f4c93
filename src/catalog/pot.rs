//! POT template serialization.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::catalog::escape_msg;
use crate::extract::StringTable;

const GENERATOR: &str = concat!("tonepot ", env!("CARGO_PKG_VERSION"));

/// Render the catalog template: header block, then one entry block per key
/// in the table's (lexicographic) order, each with its `#:` location
/// comments and an empty msgstr.
pub fn render_pot(strings: &StringTable, project_id: &str, creation_date: &str) -> String {
    let mut out = String::new();

    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    let _ = writeln!(out, "\"Project-Id-Version: {project_id}\\n\"");
    out.push_str("\"MIME-Version: 1.0\\n\"\n");
    out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
    out.push_str("\"Content-Transfer-Encoding: 8bit\\n\"\n");
    let _ = writeln!(out, "\"POT-Creation-Date: {creation_date}\\n\"");
    out.push_str("\"Language: \\n\"\n");
    let _ = writeln!(out, "\"X-Generator: {GENERATOR}\\n\"");
    out.push('\n');

    for (msgid, locations) in strings {
        for location in locations {
            let _ = writeln!(out, "#: {location}");
        }
        let _ = writeln!(out, "msgid \"{}\"", escape_msg(msgid));
        out.push_str("msgstr \"\"\n");
        out.push('\n');
    }

    out
}

/// Write the template to `path`, creating the output directory if needed.
/// The creation timestamp is the local wall clock.
pub fn write_pot(strings: &StringTable, project_id: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    let creation_date = Local::now().format("%Y-%m-%d %H:%M%z").to_string();
    let content = render_pot(strings, project_id, &creation_date);
    fs::write(path, content).with_context(|| format!("Failed to write POT file: {:?}", path))
}
