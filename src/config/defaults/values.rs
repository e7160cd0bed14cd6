use std::env;
use std::path::{Path, PathBuf};

use crate::markdown::renderer::DEFAULT_THEME;

/// Default input directory
pub fn default_input() -> PathBuf {
    PathBuf::from(".")
}

/// Default output directory
pub fn default_output() -> PathBuf {
    PathBuf::from("_site")
}

/// Default theme name
pub fn default_theme() -> String {
    "default".to_string()
}

/// Directory holding the themes shipped with sia.
///
/// Looked up next to the executable and in its parent directories, so both
/// an installed layout (`bin/sia` beside `themes/`) and a cargo build tree
/// (`target/<profile>/sia`) work. Falls back to the crate's own `themes`.
pub fn default_themes_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| find_themes_dir(&exe))
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(THEMES_DIR))
}

const THEMES_DIR: &str = "themes";

fn find_themes_dir(exe: &Path) -> Option<PathBuf> {
    exe.ancestors()
        .skip(1)
        .map(|dir| dir.join(THEMES_DIR))
        .find(|dir| dir.join(default_theme()).is_dir())
}

/// Default page template inside a theme
pub fn default_template() -> String {
    "page.html".to_string()
}

/// Default suffix of every page title
pub fn default_title_suffix() -> String {
    "Documentation".to_string()
}

/// Default source file extensions
pub fn default_markdown_ext() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

/// Default highlighting theme
pub fn default_highlight_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// Theme directories copied to the output
pub fn default_asset_dirs() -> Vec<String> {
    ["css", "js", "javascript", "javascripts", "img", "image", "images", "font", "fonts"]
        .iter()
        .map(|dir| dir.to_string())
        .collect()
}

pub fn default_true() -> bool {
    true
}
