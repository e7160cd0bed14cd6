use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::Result;
use crate::utils::fs::remove_directory;

/// Replace the asset directories of the output with the theme's.
///
/// Every directory in `dirs` is removed from `output` first, so assets the
/// theme dropped do not linger. Returns the number of files copied.
pub fn copy_theme_assets(theme_dir: &Path, output: &Path, dirs: &[String]) -> Result<usize> {
    let mut copied_count = 0;

    for dir in dirs {
        let target = output.join(dir);
        remove_directory(&target)?;

        let source = theme_dir.join(dir);
        if source.is_dir() {
            copied_count += copy_directory(&source, &target)?;
        }
    }

    Ok(copied_count)
}

/// Copy a directory recursively, returning the number of files copied
fn copy_directory(source: &Path, destination: &Path) -> Result<usize> {
    let mut copied_count = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();

        let Ok(rel_path) = path.strip_prefix(source) else {
            continue;
        };
        let dest_path = destination.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest_path)?;
            debug!("Copied asset: {} -> {}", path.display(), dest_path.display());
            copied_count += 1;
        }
    }

    Ok(copied_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_assets_replace_previous_output() {
        let theme = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir_all(theme.path().join("css")).unwrap();
        fs::write(theme.path().join("css/site.css"), "body {}").unwrap();
        fs::create_dir_all(theme.path().join("img/icons")).unwrap();
        fs::write(theme.path().join("img/icons/link.svg"), "<svg/>").unwrap();
        fs::create_dir_all(output.path().join("css")).unwrap();
        fs::write(output.path().join("css/stale.css"), "old").unwrap();
        fs::create_dir_all(output.path().join("fonts")).unwrap();

        let dirs: Vec<String> = vec!["css".into(), "img".into(), "fonts".into()];
        let copied = copy_theme_assets(theme.path(), output.path(), &dirs).unwrap();

        assert_eq!(copied, 2);
        assert!(output.path().join("css/site.css").is_file());
        assert!(output.path().join("img/icons/link.svg").is_file());
        assert!(!output.path().join("css/stale.css").exists());
        assert!(!output.path().join("fonts").exists());
    }

    #[test]
    fn test_unlisted_directories_are_left_alone() {
        let theme = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir_all(theme.path().join("extra")).unwrap();
        fs::write(theme.path().join("extra/file.txt"), "x").unwrap();

        let copied = copy_theme_assets(theme.path(), output.path(), &["css".to_string()]).unwrap();

        assert_eq!(copied, 0);
        assert!(!output.path().join("extra").exists());
    }
}
