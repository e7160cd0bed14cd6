//! Heading numbering.
//!
//! Rewrites the rendered headings of a page so they carry their dotted
//! section number, a permalink and a "back to top" link. Headings are found
//! by a literal match on `<hN id="ID">LABEL</hN>`, where `N` is the depth of
//! the node in the table of contents.

use crate::toc::node::{section_number, TocNode};

/// Whether a table of contents entry was found in the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingOutcome {
    Numbered,
    Missing,
}

/// What happened to one table of contents entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingReport {
    pub id: String,
    pub number: String,
    /// Heading rank that was searched for (1 for `<h1>`)
    pub level: usize,
    /// Index of the page owning this entry, i.e. of its top-level ancestor
    pub page: usize,
    pub outcome: HeadingOutcome,
}

/// A page's HTML after numbering, with one report per table of contents entry
#[derive(Debug, Clone)]
pub struct NumberedHtml {
    pub html: String,
    pub headings: Vec<HeadingReport>,
}

impl NumberedHtml {
    /// Entries of page `page` whose heading was not found
    pub fn missing_on_page(&self, page: usize) -> impl Iterator<Item = &HeadingReport> {
        self.headings
            .iter()
            .filter(move |h| h.page == page && h.outcome == HeadingOutcome::Missing)
    }

    /// Number of headings that were rewritten
    pub fn numbered_count(&self) -> usize {
        self.headings
            .iter()
            .filter(|h| h.outcome == HeadingOutcome::Numbered)
            .count()
    }

    fn visit(&mut self, node: &TocNode, index: usize, level: usize, prefix: &str, page: usize) {
        let number = section_number(prefix, index);

        let heading = heading_markup(level, node);
        let replacement = numbered_markup(level, node, &number);

        let outcome = if replace_first(&mut self.html, &heading, &replacement) {
            HeadingOutcome::Numbered
        } else {
            HeadingOutcome::Missing
        };

        self.headings.push(HeadingReport {
            id: node.id.clone(),
            number: number.clone(),
            level,
            page,
            outcome,
        });

        for (child_index, child) in node.children.iter().enumerate() {
            self.visit(child, child_index, level + 1, &number, page);
        }
    }
}

/// Number every heading of `html` that has an entry in `toc`.
pub fn number_titles(html: &str, toc: &[TocNode]) -> NumberedHtml {
    let mut numbered = NumberedHtml {
        html: html.to_string(),
        headings: Vec::new(),
    };

    for (index, node) in toc.iter().enumerate() {
        numbered.visit(node, index, 1, "", index);
    }

    numbered
}

/// The heading element as the renderer emits it
fn heading_markup(level: usize, node: &TocNode) -> String {
    format!("<h{level} id=\"{id}\">{label}</h{level}>", level = level, id = node.id, label = node.label)
}

fn numbered_markup(level: usize, node: &TocNode, number: &str) -> String {
    format!(
        "<h{level} id=\"{id}\">{number} {label}\
         <a class=\"actionLink icon-link\" href=\"#{id}\" title=\"Permalink to this headline\"></a>\
         <a class=\"actionLink icon-circle-arrow-up\" href=\"#top\" title=\"Go to top of page\"></a>\
         </h{level}>",
        level = level,
        id = node.id,
        number = number,
        label = node.label,
    )
}

/// Replace the first occurrence of `needle` in place
fn replace_first(haystack: &mut String, needle: &str, replacement: &str) -> bool {
    match haystack.find(needle) {
        Some(start) => {
            haystack.replace_range(start..start + needle.len(), replacement);
            true
        }
        None => false,
    }
}
