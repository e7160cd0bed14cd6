use log::debug;

use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::renderer::syntax::SyntaxHighlighter;
use crate::markdown::toc::{anchor_headings, build_toc, AnchorRegistry, Heading};
use crate::toc::TocNode;

/// Renders the documents of one site and collects their headings.
///
/// Documents must be rendered in page order: heading anchors are unique
/// across every document rendered by the same renderer, and [`toc`] folds
/// the headings of all of them into a single tree.
///
/// [`toc`]: MarkdownRenderer::toc
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
    highlighter: Option<SyntaxHighlighter>,
    anchors: AnchorRegistry,
    headings: Vec<Heading>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> Self {
        let highlighter = if config.highlight {
            Some(SyntaxHighlighter::new(&config.highlight_theme))
        } else {
            None
        };

        MarkdownRenderer {
            options: create_comrak_options(),
            highlighter,
            anchors: AnchorRegistry::new(),
            headings: Vec::new(),
        }
    }

    /// Render one document to an HTML fragment with anchored headings
    pub fn render(&mut self, content: &str) -> String {
        let mut html = render_markdown(content, &self.options);

        if let Some(highlighter) = &self.highlighter {
            html = highlighter.highlight_html(&html);
        }

        let (html, headings) = anchor_headings(&html, &mut self.anchors);
        debug!("Rendered document with {} headings", headings.len());
        self.headings.extend(headings);

        html
    }

    /// Headings of every rendered document, in order
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Table of contents of everything rendered so far
    pub fn toc(&self) -> Vec<TocNode> {
        build_toc(&self.headings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn renderer() -> MarkdownRenderer<'static> {
        let config = Config::default();
        MarkdownRenderer::new(&config)
    }

    #[test]
    fn test_markdown_rendering() {
        let mut renderer = renderer();

        let html = renderer.render("# Hello\n\nThis is a **bold** statement.");

        assert!(html.contains("<h1 id=\"hello\">Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_toc_spans_documents() {
        let mut renderer = renderer();

        renderer.render("# Intro\n\n## Install\n\n## Usage\n");
        renderer.render("# Reference\n\n## Usage\n");

        assert_eq!(
            renderer.toc(),
            vec![
                TocNode::new("intro", "Intro").with_children(vec![
                    TocNode::new("install", "Install"),
                    TocNode::new("usage", "Usage"),
                ]),
                TocNode::new("reference", "Reference").with_children(vec![TocNode::new("usage-1", "Usage")]),
            ]
        );
        assert_eq!(renderer.headings().len(), 5);
    }

    #[test]
    fn test_label_keeps_inline_markup() {
        let mut renderer = renderer();

        let html = renderer.render("# The `run` command & friends\n");

        let label = "The <code>run</code> command &amp; friends";
        assert!(html.contains(&format!("<h1 id=\"the-run-command-friends\">{}</h1>", label)));
        assert_eq!(renderer.toc()[0].label, label);
    }

    #[test]
    fn test_code_blocks_are_highlighted_unless_disabled() {
        let markdown = "# Code\n\n```rust\nfn main() {}\n```\n";

        let highlighted = renderer().render(markdown);
        assert!(highlighted.contains("<pre style="));

        let config = Config {
            highlight: false,
            ..Config::default()
        };
        let plain = MarkdownRenderer::new(&config).render(markdown);
        assert!(plain.contains("<pre><code class=\"language-rust\">"));
    }
}
