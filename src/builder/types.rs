use std::time::Duration;

/// Build statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Number of pages written
    pub pages_count: usize,
    /// Number of headings that were numbered
    pub headings_count: usize,
    /// Number of table of contents entries not found in their page
    pub missing_headings_count: usize,
    /// Number of theme assets copied
    pub assets_count: usize,
    /// Build duration
    pub duration: Duration,
}
