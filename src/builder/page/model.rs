use std::path::{Path, PathBuf};

/// A page of the site
#[derive(Debug, Clone)]
pub struct Page {
    /// Markdown source the page was rendered from
    pub source_path: PathBuf,
    /// File the page is written to
    pub output_path: PathBuf,
    /// Link other pages use to reference this one
    pub url: String,
    /// Rendered HTML fragment
    pub content: String,
}

impl Page {
    /// Create a page for `source_path`, written to `output_dir` as
    /// `<file stem>.html`
    pub fn new(source_path: &Path, output_dir: &Path, content: String) -> Self {
        let url = output_file_name(source_path);

        Page {
            source_path: source_path.to_path_buf(),
            output_path: output_dir.join(&url),
            url,
            content,
        }
    }
}

fn output_file_name(source_path: &Path) -> String {
    let stem = source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}.html", stem)
}
