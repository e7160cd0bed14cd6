//! Table of contents: heading numbering, navigation list and page links.
//!
//! All of it works on the site-wide tree produced by the markdown renderer
//! once every page is rendered. The `n`-th top-level entry is the `n`-th page.

mod navigation;
mod node;
mod numberer;
mod renderer;

pub use navigation::page_links;
pub use node::{count_nodes, duplicate_ids, TocNode};
pub use numberer::number_titles;
pub use renderer::{check_alignment, render_toc};
