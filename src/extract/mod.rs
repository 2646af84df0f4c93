//! Extraction pipeline: file discovery, marker matching, string collection.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;

pub mod matcher;
pub mod scanner;

use matcher::MarkerMatcher;

/// Unique source string → ordered `path:line` occurrence list. BTreeMap
/// iteration gives the lexicographic key order the catalog is written in.
pub type StringTable = BTreeMap<String, Vec<String>>;

/// Scan the files in order and collect every marker-call string argument.
///
/// File contents are decoded best-effort: bytes that are not valid UTF-8
/// never abort the run. Occurrences of the same string append to its
/// location list in order of appearance.
pub fn collect_strings(files: &[PathBuf], config: &Config) -> Result<StringTable> {
    let matcher = MarkerMatcher::new(&config.text_domain)?;
    let mut strings = StringTable::new();

    for path in files {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read source file: {:?}", path))?;
        let content = String::from_utf8_lossy(&bytes);
        let location_path = relative_display(path);

        for found in matcher.find_all(&content) {
            strings
                .entry(found.text)
                .or_default()
                .push(format!("{location_path}:{}", found.line));
        }
    }

    Ok(strings)
}

/// Location paths are recorded relative to the working directory, without a
/// leading `./`.
fn relative_display(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok())
        .unwrap_or(path);
    let display = relative.to_string_lossy();
    display.strip_prefix("./").unwrap_or(&display).to_string()
}
