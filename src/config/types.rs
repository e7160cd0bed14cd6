use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the markdown sources
    #[serde(default = "defaults::default_input")]
    pub input: PathBuf,

    /// Directory the pages are written to
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Theme name, or path to a theme directory
    #[serde(default = "defaults::default_theme")]
    pub theme: String,

    /// Directory holding the named themes
    #[serde(default = "defaults::default_themes_dir")]
    pub themes_dir: PathBuf,

    /// Page template file inside the theme
    #[serde(default = "defaults::default_template")]
    pub template: String,

    /// Appended to every page title
    #[serde(default = "defaults::default_title_suffix")]
    pub title_suffix: String,

    /// Source file extensions
    #[serde(default = "defaults::default_markdown_ext")]
    pub markdown_ext: Vec<String>,

    /// French typographic spacing (non-breaking space before `!?:»`)
    #[serde(default = "defaults::default_true")]
    pub typography: bool,

    /// Highlight fenced code blocks
    #[serde(default = "defaults::default_true")]
    pub highlight: bool,

    /// Syntax highlighting theme
    #[serde(default = "defaults::default_highlight_theme")]
    pub highlight_theme: String,

    /// Fail when a heading from the table of contents is missing from its page
    #[serde(default)]
    pub strict_headings: bool,

    /// Theme directories copied to the output
    #[serde(default = "defaults::default_asset_dirs")]
    pub asset_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: defaults::default_input(),
            output: defaults::default_output(),
            theme: defaults::default_theme(),
            themes_dir: defaults::default_themes_dir(),
            template: defaults::default_template(),
            title_suffix: defaults::default_title_suffix(),
            markdown_ext: defaults::default_markdown_ext(),
            typography: true,
            highlight: true,
            highlight_theme: defaults::default_highlight_theme(),
            strict_headings: false,
            asset_dirs: defaults::default_asset_dirs(),
        }
    }
}

impl Config {
    /// Directory of the selected theme.
    ///
    /// `theme` is used as a path when it names an existing directory,
    /// otherwise it is looked up in `themes_dir`.
    pub fn theme_dir(&self) -> PathBuf {
        let direct = Path::new(&self.theme);
        if direct.is_dir() {
            direct.to_path_buf()
        } else {
            self.themes_dir.join(&self.theme)
        }
    }

    /// Path of the page template
    pub fn template_path(&self) -> PathBuf {
        self.theme_dir().join(&self.template)
    }
}
