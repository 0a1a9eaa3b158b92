use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod history;
mod models;
mod strength;
mod utils;

mod tests;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        }) => cli::handlers::handle_generate(
            &config,
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            args.json,
        ),
        Some(CliCommand::Classify { password }) => cli::handlers::handle_classify(&password, args.json),
        None => cli::menu::run_cli_menu(&config),
    }
}
