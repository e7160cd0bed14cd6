use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::utils::error::Result;

/// Log level for the given flags; `quiet` wins over `debug`
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the level matching the flags
pub fn init_logging(debug: bool, quiet: bool) -> Result<LevelFilter> {
    let level = log_level(debug, quiet);

    SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()?;

    Ok(level)
}
