use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Captures, Regex};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Theme used when the configured one does not exist
pub const DEFAULT_THEME: &str = "InspiredGitHub";

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"(?s)<pre><code class="language-([^"]+)">(.*?)</code></pre>"#)
            .expect("valid code block regex");
}

/// Highlights fenced code blocks with inline styles, so pages need no
/// highlighting stylesheet
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntaxHighlighter {
    /// Create a highlighter using the named theme
    pub fn new(theme_name: &str) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();

        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                warn!("Unknown highlight theme {}, using {}", theme_name, DEFAULT_THEME);
                theme_set.themes.remove(DEFAULT_THEME).unwrap_or_default()
            }
        };

        SyntaxHighlighter { syntax_set, theme }
    }

    /// Highlight every language-tagged code block of a rendered document
    pub fn highlight_html(&self, html: &str) -> String {
        CODE_BLOCK_REGEX
            .replace_all(html, |caps: &Captures| {
                let code = html_escape::decode_html_entities(&caps[2]);
                match self.highlight_code(&code, &caps[1]) {
                    Some(highlighted) => highlighted,
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Highlight a specific code block with specified language
    pub fn highlight_code(&self, code: &str, lang: &str) -> Option<String> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| {
                debug!("No syntax for {}, highlighting as plain text", lang);
                self.syntax_set.find_syntax_plain_text()
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(html) => Some(html),
            Err(e) => {
                warn!("Syntax highlighting failed for {} block: {}", lang, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighting_uses_inline_styles() {
        let highlighter = SyntaxHighlighter::new(DEFAULT_THEME);
        let html = "<pre><code class=\"language-rust\">fn main() {\n    let x = &quot;hi&quot;;\n}\n</code></pre>";

        let processed = highlighter.highlight_html(html);

        assert!(processed.starts_with("<pre style=\""));
        assert!(processed.contains("style=\"color:"));
        assert!(!processed.contains("language-rust"));
    }

    #[test]
    fn test_untagged_blocks_are_untouched() {
        let highlighter = SyntaxHighlighter::new(DEFAULT_THEME);
        let html = "<pre><code>plain\n</code></pre>";

        assert_eq!(highlighter.highlight_html(html), html);
    }

    #[test]
    fn test_unknown_language_and_theme_fall_back() {
        let highlighter = SyntaxHighlighter::new("no-such-theme");

        let highlighted = highlighter.highlight_code("just text\n", "no-such-language");

        assert!(highlighted.is_some_and(|html| html.contains("just text")));
    }
}
