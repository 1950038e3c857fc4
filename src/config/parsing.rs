//! Line-level helpers for `key = value` configuration files.

/// What: Remove an inline comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text that may include a trailing comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - `#` starts a comment anywhere; `//` only when preceded by whitespace, so paths keep their slashes.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    if let Some(i) = s.find(" //").or_else(|| s.find("\t//")) {
        s = &s[..i];
    }
    if s.starts_with("//") {
        return "";
    }
    s.trim()
}

/// What: Normalize a configuration key for comparison.
///
/// Inputs:
/// - `raw`: Key as written in the file.
///
/// Output:
/// - Lowercased key with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
