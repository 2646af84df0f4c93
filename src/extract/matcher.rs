//! Marker-call matching over whole-file content.
//!
//! A single regex pass finds `marker( '<text>', '<domain>' )` invocations
//! where `marker` is one of the recognized gettext-style functions and the
//! domain literal equals the configured text domain exactly. The string
//! argument may be single- or double-quoted and may contain backslash-escaped
//! occurrences of its own quote character; the match runs in DOTALL mode, so
//! a string literal spanning line breaks is still captured.

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::MARKER_FUNCTIONS;

/// One marker-call hit: the unescaped string argument and the 1-based line
/// of the match start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    pub text: String,
    pub line: usize,
}

pub struct MarkerMatcher {
    pattern: Regex,
}

impl MarkerMatcher {
    pub fn new(text_domain: &str) -> Result<Self> {
        let markers = MARKER_FUNCTIONS.join("|");
        let domain = regex::escape(text_domain);
        // The regex crate has no backreferences, so the "close with the same
        // quote that opened" rule is an alternation over both quote styles.
        let pattern = format!(
            r#"(?s)\b(?:{markers})\s*\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*,\s*['"]{domain}['"]"#
        );
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Failed to build marker pattern for domain '{text_domain}'"))?;
        Ok(Self { pattern })
    }

    /// All marker calls in `content`, in order of appearance.
    pub fn find_all(&self, content: &str) -> Vec<MarkerMatch> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let raw = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                let line = line_number(content, whole.start());
                Some(MarkerMatch {
                    text: unescape_quotes(raw),
                    line,
                })
            })
            .collect()
    }
}

/// 1-based line of a byte offset, counting preceding line breaks.
fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Resolve escaped quotes in the captured argument. Only quote escapes are
/// processed; `\n`, `\t` and the like pass through untouched.
fn unescape_quotes(raw: &str) -> String {
    raw.replace("\\'", "'").replace("\\\"", "\"")
}
