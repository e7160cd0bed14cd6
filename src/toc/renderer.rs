use std::fmt::Write;

use crate::builder::page::Page;
use crate::toc::node::{section_number, TocNode};
use crate::utils::error::{Result, SiaError};

/// Render the site-wide table of contents as nested `<ul class="toc-list">`
/// lists, marking the top-level entry of page `active`.
///
/// Each top-level entry links to the page at the same position; its
/// descendants link to anchors on that page.
pub fn render_toc(toc: &[TocNode], active: usize, pages: &[Page]) -> Result<String> {
    check_alignment(toc, pages)?;
    if active >= pages.len() {
        return Err(SiaError::PageOutOfRange {
            index: active,
            len: pages.len(),
        });
    }

    let active_id = toc[active].id.as_str();
    let mut html = String::with_capacity(256 * toc.len());

    html.push_str("<ul class=\"toc-list\">");
    for (index, (node, page)) in toc.iter().zip(pages).enumerate() {
        let class = if node.id == active_id { " class=\"active\"" } else { "" };
        render_item(&mut html, node, index, "", &page.url, class);
    }
    html.push_str("</ul>");

    Ok(html)
}

/// Fail unless every top-level entry has exactly one page
pub fn check_alignment(toc: &[TocNode], pages: &[Page]) -> Result<()> {
    if toc.len() != pages.len() {
        return Err(SiaError::TocPageMismatch {
            toc: toc.len(),
            pages: pages.len(),
        });
    }
    Ok(())
}

fn render_item(html: &mut String, node: &TocNode, index: usize, prefix: &str, url: &str, class: &str) {
    let number = section_number(prefix, index);

    let _ = write!(
        html,
        "<li{}><a href=\"{}#{}\">{} {}</a>",
        class,
        html_escape::encode_double_quoted_attribute(url),
        html_escape::encode_double_quoted_attribute(&node.id),
        number,
        node.label
    );

    if !node.children.is_empty() {
        html.push_str("<ul class=\"toc-list\">");
        for (child_index, child) in node.children.iter().enumerate() {
            render_item(html, child, child_index, &number, url, "");
        }
        html.push_str("</ul>");
    }

    html.push_str("</li>");
}
