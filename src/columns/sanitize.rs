//! Fallback rule for headers that are not in the known map.

/// Snake-case a header: every character that is not an ASCII letter or digit becomes `_`,
/// the result is lowercased, and leading/trailing `_` are stripped.
///
/// Runs of separators are kept (`"a - b"` -> `"a___b"`). A header made only of separators
/// sanitizes to the empty string.
pub fn sanitize_label(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            'A'..='Z' => c.to_ascii_lowercase(),
            _ => '_',
        })
        .collect();
    replaced.trim_matches('_').to_owned()
}
