use log::info;

use crate::builder::page::model::Page;
use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::Result;
use crate::utils::fs;

/// Render every source file of the input directory, in path order.
///
/// The renderer keeps the headings of all pages, so its table of contents
/// lines up with the returned pages.
pub fn collect_pages(config: &Config, renderer: &mut MarkdownRenderer<'_>) -> Result<Vec<Page>> {
    let sources = fs::list_sources(&config.input, &config.markdown_ext)?;
    let mut pages = Vec::with_capacity(sources.len());

    for source in sources {
        info!("Read {}", source.display());

        let markdown = fs::read_file(&source)?;
        let content = renderer.render(&markdown);
        pages.push(Page::new(&source, &config.output, content));
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    #[test]
    fn test_pages_follow_file_order() {
        let input = TempDir::new().unwrap();
        stdfs::write(input.path().join("b.md"), "# Second\n").unwrap();
        stdfs::write(input.path().join("a.md"), "# First\n").unwrap();
        stdfs::write(input.path().join("readme.txt"), "# Not a page\n").unwrap();

        let config = Config {
            input: input.path().to_path_buf(),
            output: "out".into(),
            ..Config::default()
        };
        let mut renderer = MarkdownRenderer::new(&config);

        let pages = collect_pages(&config, &mut renderer).unwrap();

        let urls: Vec<_> = pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["a.html", "b.html"]);
        assert!(pages[0].content.contains("<h1 id=\"first\">First</h1>"));

        let toc = renderer.toc();
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[1].label, "Second");
    }
}
