use std::io;
use std::path::PathBuf;

/// Common result type for sia operations
pub type Result<T> = std::result::Result<T, SiaError>;

/// Error types for sia operations
#[derive(Debug, thiserror::Error)]
pub enum SiaError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme loading or rendering error
    #[error("Theme error: {0}")]
    Theme(String),

    /// The top level of the table of contents does not line up with the pages
    #[error("Table of contents has {toc} top-level entries but there are {pages} pages")]
    TocPageMismatch { toc: usize, pages: usize },

    /// A page index outside of the page list
    #[error("Page index {index} is out of range ({len} pages)")]
    PageOutOfRange { index: usize, len: usize },

    /// A heading listed in the table of contents was not found in its page
    #[error("Heading {number} (<h{level}> #{id}) was not found in {}", .page.display())]
    MissingHeading {
        id: String,
        number: String,
        level: usize,
        page: PathBuf,
    },

    /// Two table of contents entries share an anchor
    #[error("Duplicate table of contents anchor: #{0}")]
    DuplicateTocId(String),

    /// The logger could not be installed
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
