use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::utils::error::{Result, SiaError};
use crate::utils::fs;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex =
        Regex::new(r"\{(title|page|toc|previous|next)\}").expect("valid placeholder regex");
}

/// Values substituted into the page template
#[derive(Debug, Clone, Default)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub page: &'a str,
    pub toc: &'a str,
    pub previous: &'a str,
    pub next: &'a str,
}

/// A theme's page template with `{title}`, `{page}`, `{toc}`, `{previous}`
/// and `{next}` placeholders
#[derive(Debug, Clone)]
pub struct PageTemplate {
    path: PathBuf,
    source: String,
}

impl PageTemplate {
    /// Load a template from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_file(path).map_err(|e| {
            SiaError::Theme(format!("Failed to read template {}: {}", path.display(), e))
        })?;

        debug!("Loaded template {}", path.display());
        Ok(Self::from_source(path, source))
    }

    pub fn from_source<P: AsRef<Path>>(path: P, source: impl Into<String>) -> Self {
        PageTemplate {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fill the placeholders in a single pass; substituted values are not
    /// scanned again.
    pub fn render(&self, context: &PageContext<'_>) -> String {
        PLACEHOLDER_REGEX
            .replace_all(&self.source, |caps: &Captures| match &caps[1] {
                "title" => context.title,
                "page" => context.page,
                "toc" => context.toc,
                "previous" => context.previous,
                _ => context.next,
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholders_are_filled() {
        let template = PageTemplate::from_source(
            "page.html",
            "<title>{title}</title><nav>{toc}</nav><main>{page}</main>{previous}|{next}",
        );

        let html = template.render(&PageContext {
            title: "Intro - Docs",
            page: "<h1>Intro</h1>",
            toc: "<ul></ul>",
            previous: "",
            next: "<a href=\"b.html\">B</a>",
        });

        assert_eq!(
            html,
            "<title>Intro - Docs</title><nav><ul></ul></nav><main><h1>Intro</h1></main>|<a href=\"b.html\">B</a>"
        );
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let template = PageTemplate::from_source("page.html", "{page}|{toc}");

        let html = template.render(&PageContext {
            page: "write {toc} in your layout",
            toc: "TOC",
            ..PageContext::default()
        });

        assert_eq!(html, "write {toc} in your layout|TOC");
    }

    #[test]
    fn test_placeholders_repeat_and_unknown_ones_stay() {
        let template = PageTemplate::from_source("page.html", "{title} {title} {author}");

        let html = template.render(&PageContext {
            title: "T",
            ..PageContext::default()
        });

        assert_eq!(html, "T T {author}");
    }

    #[test]
    fn test_load_missing_template() {
        let err = PageTemplate::load("/definitely/not/here/page.html").unwrap_err();
        assert!(matches!(err, SiaError::Theme(_)));
    }
}
