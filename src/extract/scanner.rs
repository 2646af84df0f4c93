use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::SOURCE_EXTENSION;

fn is_ignored_dir(entry: &DirEntry, ignores: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignores.iter().any(|ignored| ignored == name))
}

fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_string_lossy()
            .ends_with(SOURCE_EXTENSION)
}

/// Collect every PHP file under `root`, pruning ignored directory names at
/// any depth. Entries are sorted by file name within each directory so
/// repeated runs visit files in the same order.
pub fn scan_files(root: &Path, ignores: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignores))
        .filter_map(Result::ok)
        .filter(is_source_file)
        .map(DirEntry::into_path)
        .collect()
}
