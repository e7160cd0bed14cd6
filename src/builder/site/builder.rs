use std::time::Instant;

use log::{debug, info, warn};

use crate::builder::page::{collect_pages, Page};
use crate::builder::typography::apply_typography;
use crate::builder::types::BuildStats;
use crate::config::Config;
use crate::markdown::{strip_tags, MarkdownRenderer};
use crate::theme::{copy_theme_assets, PageContext, PageTemplate};
use crate::toc::{check_alignment, count_nodes, duplicate_ids, number_titles, page_links, render_toc, TocNode};
use crate::utils::error::{Result, SiaError};
use crate::utils::fs;

/// Build the documentation site described by `config`
pub fn build_site(config: &Config) -> Result<BuildStats> {
    let start_time = Instant::now();
    let mut stats = BuildStats::default();

    info!("Using input directory: {}", config.input.display());
    info!("Output will be generated in: {}", config.output.display());

    let template = PageTemplate::load(config.template_path())?;
    debug!("Using template {}", template.path().display());

    let mut renderer = MarkdownRenderer::new(config);
    let pages = collect_pages(config, &mut renderer)?;
    let toc = renderer.toc();
    debug!(
        "Table of contents has {} entries for {} headings over {} pages",
        count_nodes(&toc),
        renderer.headings().len(),
        toc.len()
    );

    if let Some(id) = duplicate_ids(&toc).into_iter().next() {
        return Err(SiaError::DuplicateTocId(id));
    }
    check_alignment(&toc, &pages)?;

    for (index, page) in pages.iter().enumerate() {
        info!("Create {}", page.output_path.display());

        let html = generate_page(config, &template, &toc, &pages, index, &mut stats)?;
        fs::write_file(&page.output_path, &html)?;
        stats.pages_count += 1;
    }

    info!("Copying theme assets...");
    stats.assets_count = copy_theme_assets(&config.theme_dir(), &config.output, &config.asset_dirs)?;
    info!("Copied {} asset files", stats.assets_count);

    stats.duration = start_time.elapsed();
    info!("Site built in {:.2?}", stats.duration);
    info!(
        "Pages: {}, Headings: {}, Missing headings: {}, Assets: {}",
        stats.pages_count, stats.headings_count, stats.missing_headings_count, stats.assets_count
    );

    Ok(stats)
}

/// Produce the final HTML of page `index`
fn generate_page(
    config: &Config,
    template: &PageTemplate,
    toc: &[TocNode],
    pages: &[Page],
    index: usize,
    stats: &mut BuildStats,
) -> Result<String> {
    let page = &pages[index];

    let numbered = number_titles(&page.content, toc);
    for missing in numbered.missing_on_page(index) {
        if config.strict_headings {
            return Err(SiaError::MissingHeading {
                id: missing.id.clone(),
                number: missing.number.clone(),
                level: missing.level,
                page: page.source_path.clone(),
            });
        }
        warn!(
            "Heading {} (<h{}> #{}) not found in {}",
            missing.number,
            missing.level,
            missing.id,
            page.source_path.display()
        );
        stats.missing_headings_count += 1;
    }
    stats.headings_count += numbered.numbered_count();

    let content = if config.typography {
        apply_typography(&numbered.html)
    } else {
        numbered.html
    };

    let title = format!("{} - {}", strip_tags(&toc[index].label), config.title_suffix);
    let toc_html = render_toc(toc, index, pages)?;
    let links = page_links(index, toc, pages);

    Ok(template.render(&PageContext {
        title: &title,
        page: &content,
        toc: &toc_html,
        previous: &links.previous,
        next: &links.next,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use std::path::Path;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{title}</title><nav>{toc}</nav><main>{page}</main><p>{previous}|{next}</p>";

    fn site(docs: &[(&str, &str)]) -> (TempDir, Config) {
        let root = TempDir::new().unwrap();
        let input = root.path().join("docs");
        let output = root.path().join("out");
        let theme = root.path().join("themes/default");
        stdfs::create_dir_all(&input).unwrap();
        stdfs::create_dir_all(&output).unwrap();
        stdfs::create_dir_all(theme.join("css")).unwrap();
        stdfs::write(theme.join("page.html"), TEMPLATE).unwrap();
        stdfs::write(theme.join("css/site.css"), "body {}").unwrap();

        for (name, body) in docs {
            stdfs::write(input.join(name), body).unwrap();
        }

        let config = Config {
            input,
            output,
            themes_dir: root.path().join("themes"),
            title_suffix: "Manual".to_string(),
            ..Config::default()
        };
        (root, config)
    }

    fn read(path: &Path) -> String {
        stdfs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_builds_numbered_linked_pages() {
        let (_root, config) = site(&[
            ("01-intro.md", "# Intro\n\n## Install\n\nRun it ?\n\n## Usage\n"),
            ("02-api.md", "# API\n\n## Calls\n"),
        ]);

        let stats = build_site(&config).unwrap();

        assert_eq!(stats.pages_count, 2);
        assert_eq!(stats.headings_count, 5);
        assert_eq!(stats.missing_headings_count, 0);
        assert_eq!(stats.assets_count, 1);

        let intro = read(&config.output.join("01-intro.html"));
        assert!(intro.contains("<title>Intro - Manual</title>"));
        assert!(intro.contains("<h1 id=\"intro\">1. Intro<a class=\"actionLink icon-link\" href=\"#intro\""));
        assert!(intro.contains("<h2 id=\"usage\">1.2. Usage<a"));
        assert!(intro.contains("Run it&nbsp;?"));
        assert!(intro.contains("<li class=\"active\"><a href=\"01-intro.html#intro\">1. Intro</a>"));
        assert!(intro.contains("<a href=\"02-api.html#calls\">2.1. Calls</a>"));
        assert!(intro.contains("<p>|<a href=\"02-api.html\">API</a> <i class=\"icon-chevron-right\"></i></p>"));

        let api = read(&config.output.join("02-api.html"));
        assert!(api.contains("<h2 id=\"calls\">2.1. Calls<a"));
        assert!(api.contains("<li class=\"active\"><a href=\"02-api.html#api\">2. API</a>"));
        assert!(api.contains("<p><i class=\"icon-chevron-left\"></i> <a href=\"01-intro.html\">Intro</a>|</p>"));

        assert!(config.output.join("css/site.css").is_file());
    }

    #[test]
    fn test_title_strips_inline_markup() {
        let (_root, config) = site(&[("index.md", "# The `sia` tool\n")]);

        build_site(&config).unwrap();

        let html = read(&config.output.join("index.html"));
        assert!(html.contains("<title>The sia tool - Manual</title>"));
        assert!(html.contains("<p>|</p>"));
    }

    #[test]
    fn test_page_without_top_heading_is_fatal() {
        let (_root, config) = site(&[("a.md", "# A\n"), ("b.md", "Just text.\n")]);

        let err = build_site(&config).unwrap_err();

        assert!(matches!(err, SiaError::TocPageMismatch { toc: 1, pages: 2 }));
        assert!(!config.output.join("a.html").exists());
    }

    #[test]
    fn test_skipped_heading_level_is_reported() {
        let (_root, config) = site(&[("a.md", "# A\n\n### Deep\n")]);

        let stats = build_site(&config).unwrap();
        assert_eq!(stats.missing_headings_count, 1);
        assert!(read(&config.output.join("a.html")).contains("<h3 id=\"deep\">Deep</h3>"));

        let strict = Config {
            strict_headings: true,
            ..config
        };
        let err = build_site(&strict).unwrap_err();
        assert!(matches!(err, SiaError::MissingHeading { ref id, level: 2, .. } if id == "deep"));
        assert!(err.to_string().starts_with("Heading 1.1. (<h2> #deep) was not found in "));
    }

    #[test]
    fn test_typography_can_be_disabled() {
        let (_root, mut config) = site(&[("a.md", "# A\n\nReally ?\n")]);
        config.typography = false;

        build_site(&config).unwrap();

        assert!(read(&config.output.join("a.html")).contains("Really ?"));
    }
}
