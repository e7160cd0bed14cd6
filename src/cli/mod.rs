pub mod logging;
pub mod types;

use clap::Parser;
use log::info;

use crate::builder;
use crate::config::{self, Config};
use crate::utils::error::Result;

/// Run the command-line interface
pub fn run() -> Result<()> {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug, cli.quiet)?;

    let mut config = config::load_config(&cli.input, cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    config::validate_config(&config)?;

    info!("Building site...");
    let stats = builder::build_site(&config)?;
    info!(
        "Site built successfully at {} ({} pages)",
        config.output.display(),
        stats.pages_count
    );

    Ok(())
}

/// Command line flags take precedence over the configuration file
fn apply_overrides(config: &mut Config, cli: &types::Cli) {
    config.output = cli.output.clone();

    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if let Some(suffix) = &cli.title_suffix {
        config.title_suffix = suffix.clone();
    }
    if cli.strict {
        config.strict_headings = true;
    }
    if cli.no_typography {
        config.typography = false;
    }
    if cli.no_highlight {
        config.highlight = false;
    }
}
