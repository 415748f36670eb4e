//! Rendering of canonical titles and merge keys.

/// Render text as a canonical title.
///
/// Lowercases ASCII letters, turns every other character (punctuation,
/// apostrophes, dashes, non-Latin letters) into a space, then collapses
/// runs of spaces. The result only contains `[a-z0-9 ]` with no leading,
/// trailing or doubled spaces.
pub fn render(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key under which two titles are considered the same: all whitespace
/// removed, ASCII-lowercased.
pub fn merge_key(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
