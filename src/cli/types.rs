use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "sia")]
#[command(about = "Builds a numbered, cross-linked documentation site from markdown files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the markdown sources
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Directory the pages are written to
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Theme name, or path to a theme directory
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Custom configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Text appended to every page title
    #[arg(long, value_name = "TEXT")]
    pub title_suffix: Option<String>,

    /// Fail when a heading of the table of contents is missing from its page
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Disable French typographic spacing
    #[arg(long, default_value_t = false)]
    pub no_typography: bool,

    /// Disable syntax highlighting of code blocks
    #[arg(long, default_value_t = false)]
    pub no_highlight: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Silence output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
