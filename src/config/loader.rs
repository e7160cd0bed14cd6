use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::utils::error::{Result, SiaError};

/// Configuration file names looked up in the input directory
const CONFIG_FILES: [&str; 4] = ["_config.toml", "_config.yml", "_config.yaml", "_config.json"];

/// Load the site configuration.
///
/// `config_file` wins when given; otherwise the first known config file in
/// `input_dir` is used, and defaults apply when there is none. The input
/// directory is always `input_dir`.
pub fn load_config<P: AsRef<Path>>(input_dir: P, config_file: Option<&Path>) -> Result<Config> {
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file(&input_dir),
    };

    let mut config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.input = input_dir.as_ref().to_path_buf();

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first configuration file present in the input directory
fn find_default_config_file<P: AsRef<Path>>(input_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| input_dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file, choosing the format by extension
fn parse_config_file(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Err(SiaError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        SiaError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", config_path, e)),
        "json" => serde_json::from_str(&content).map_err(|e| parse_error("JSON", config_path, e)),
        // Assume YAML if no extension
        "yml" | "yaml" | "" => serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", config_path, e)),
        other => Err(SiaError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

fn parse_error(format: &str, path: &Path, err: impl std::fmt::Display) -> SiaError {
    SiaError::Config(format!(
        "Failed to parse {} configuration ({}): {}",
        format,
        path.display(),
        err
    ))
}
