use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::utils::error::{Result, SiaError};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    if path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// List the files directly inside `dir` whose extension is one of `extensions`.
///
/// Matching is case-insensitive and the result is sorted by path, so the
/// order of the generated pages does not depend on the filesystem.
pub fn list_sources<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.as_ref().to_string_lossy());
    let pattern = format!("{}/*", escaped);

    let entries = glob::glob(&pattern)
        .map_err(|e| SiaError::Config(format!("Invalid source pattern {}: {}", pattern, e)))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SiaError::Io(e.into_error()))?;
        if path.is_file() && has_extension(&path, extensions) {
            sources.push(path);
        }
    }

    sources.sort();
    debug!("Found {} source files in {}", sources.len(), dir.as_ref().display());
    Ok(sources)
}

/// Check if a path has one of the given extensions
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.iter().any(|e| e.to_lowercase() == ext))
}
