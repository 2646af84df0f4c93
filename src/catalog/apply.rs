//! Translation application: fill a POT template's empty entries from the
//! built-in dictionary and write the locale-specific PO catalog.
//!
//! Matching is deliberately line-adjacent: only a single-line `msgid "..."`
//! immediately followed by `msgstr ""` is rewritten. Multi-line msgids and
//! entries that already carry a translation are left byte-identical.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::catalog::{dictionary, escape_msg, unescape_msg};

/// An empty entry: one msgid line directly followed by an empty msgstr line.
static EMPTY_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"msgid "((?:[^"\\\n]|\\[^\n])*)"\nmsgstr """#)
        .expect("empty-entry pattern is valid")
});

/// Header line as serialized in the template, and its translated form.
const LANGUAGE_EMPTY: &str = "\"Language: \\n\"";

/// Result of applying the dictionary to a template.
pub struct Applied {
    pub content: String,
    pub entries_translated: usize,
}

/// Rewrite the header language field to `locale` and fill every empty entry
/// whose key is in the dictionary. Everything else is preserved verbatim.
pub fn apply_translations(template: &str, locale: &str) -> Applied {
    let content = template.replace(LANGUAGE_EMPTY, &format!("\"Language: {locale}\\n\""));

    let mut entries_translated = 0;
    let content = EMPTY_ENTRY.replace_all(&content, |caps: &Captures| {
        let raw_msgid = &caps[1];
        match dictionary::lookup(&unescape_msg(raw_msgid)) {
            Some(translation) => {
                entries_translated += 1;
                format!(
                    "msgid \"{raw_msgid}\"\nmsgstr \"{}\"",
                    escape_msg(translation)
                )
            }
            None => caps[0].to_string(),
        }
    });

    Applied {
        content: content.into_owned(),
        entries_translated,
    }
}

/// File-level applier: read the template (missing template is fatal), apply
/// the dictionary, write the PO catalog next to it.
pub fn apply_file(template_path: &Path, po_path: &Path, locale: &str) -> Result<Applied> {
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template catalog: {:?}", template_path))?;

    let applied = apply_translations(&template, locale);

    if let Some(parent) = po_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    fs::write(po_path, &applied.content)
        .with_context(|| format!("Failed to write PO file: {:?}", po_path))?;

    Ok(applied)
}
