use std::path::Path;

use log::info;

use crate::config::Config;
use crate::utils::error::{Result, SiaError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_directory("Input", &config.input)?;
    validate_directory("Output", &config.output)?;
    validate_directory("Theme", &config.theme_dir())?;

    let template = config.template_path();
    if !template.is_file() {
        return Err(SiaError::Config(format!(
            "Theme template \"{}\" does not exist.",
            template.display()
        )));
    }

    info!("Theme directory: {}", config.theme_dir().display());
    Ok(())
}

fn validate_directory(kind: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SiaError::Config(format!(
            "{} directory \"{}\" does not exist.",
            kind,
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(SiaError::Config(format!(
            "{} path \"{}\" is not a directory.",
            kind,
            path.display()
        )));
    }

    Ok(())
}
