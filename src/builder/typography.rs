//! French typographic spacing.

/// Plain spaces around French punctuation, replaced by non-breaking ones
const REPLACEMENTS: [(&str, &str); 5] = [
    ("« ", "«&nbsp;"),
    (" »", "&nbsp;»"),
    (" !", "&nbsp;!"),
    (" ?", "&nbsp;?"),
    (" :", "&nbsp;:"),
];

/// Keep guillemets and `!`, `?`, `:` on the same line as the word they
/// belong to
pub fn apply_typography(html: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(html.to_string(), |text, (from, to)| text.replace(from, to))
}
