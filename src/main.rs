mod builder;
mod cli;
mod config;
mod markdown;
mod theme;
mod toc;
mod utils;

fn main() {
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        if log::max_level() == log::LevelFilter::Off {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
