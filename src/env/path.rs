// src/env/path.rs

//! Path-list prepending with the platform separator.

/// Separator for path-list variables (`;` on Windows, `:` elsewhere).
pub fn path_list_separator() -> char {
    if cfg!(windows) { ';' } else { ':' }
}

/// Join `entries` in front of an existing path-list value.
///
/// - Empty entries are skipped.
/// - Entry order is preserved.
/// - When `existing` is non-empty it becomes the final element, so the
///   result always ends with the inherited value; when it is empty or
///   absent there is no trailing separator.
pub fn prepend_entries(existing: Option<&str>, entries: &[String]) -> String {
    let mut parts: Vec<&str> = entries
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(value) = existing {
        if !value.is_empty() {
            parts.push(value);
        }
    }

    parts.join(&path_list_separator().to_string())
}
