//! Gettext catalog handling: POT serialization, the built-in translation
//! dictionary, PO application, and MO compilation.

pub mod apply;
pub mod compile;
pub mod dictionary;
pub mod pot;

/// Escape a message for a double-quoted PO string: backslash, double quote,
/// and line break. Other characters pass through.
pub(crate) fn escape_msg(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Inverse of [`escape_msg`]: resolve `\n` to a line break and any other
/// backslash pair to its second character.
pub(crate) fn unescape_msg(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
