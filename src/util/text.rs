//! Text formatting helpers
//!
//! Small helpers for fitting option text into fixed-width UI rows and
//! for turning user-entered save names into safe file names.

/// Truncate `text` to at most `max_chars` characters, ending with an
/// ellipsis when anything was cut.
///
/// # Examples
/// ```
/// use spinpick::util::text::truncate_ellipsis;
///
/// assert_eq!(truncate_ellipsis("Pizza", 10), "Pizza");
/// assert_eq!(truncate_ellipsis("Dumplings", 6), "Dumpl…");
/// ```
pub fn truncate_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Reduce a user-entered save name to a flat file name: keep
/// alphanumerics (any script), `-`, `_` and `.`; turn whitespace and
/// path separators into a single `-`; drop everything else.
///
/// # Examples
/// ```
/// use spinpick::util::text::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("week/end plans?"), "week-end-plans");
/// assert_eq!(sanitize_file_name("晚饭选项"), "晚饭选项");
/// assert_eq!(sanitize_file_name("///"), "");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::new();
    for c in name.trim().chars() {
        if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
            out.push(c);
        } else if c.is_whitespace() || matches!(c, '/' | '\\') {
            if !out.ends_with('-') {
                out.push('-');
            }
        }
    }
    out.trim_matches(|c| c == '-' || c == '.').to_string()
}
