use crate::builder::page::Page;
use crate::toc::node::TocNode;

/// Links to the neighbouring pages in top-level order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub previous: String,
    pub next: String,
}

/// Compute the previous/next links of page `index`.
///
/// A direction with no page, or with no matching top-level entry, is an
/// empty string. There is no wraparound.
pub fn page_links(index: usize, toc: &[TocNode], pages: &[Page]) -> PageLinks {
    let previous = index
        .checked_sub(1)
        .and_then(|i| neighbour(i, toc, pages))
        .map(|link| format!("<i class=\"icon-chevron-left\"></i> {}", link))
        .unwrap_or_default();

    let next = neighbour(index + 1, toc, pages)
        .map(|link| format!("{} <i class=\"icon-chevron-right\"></i>", link))
        .unwrap_or_default();

    PageLinks { previous, next }
}

fn neighbour(index: usize, toc: &[TocNode], pages: &[Page]) -> Option<String> {
    let node = toc.get(index)?;
    let page = pages.get(index)?;
    Some(format!(
        "<a href=\"{}\">{}</a>",
        html_escape::encode_double_quoted_attribute(&page.url),
        node.label
    ))
}
