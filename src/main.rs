//! vasset - cache-busting asset URLs and the application layout that uses them.

mod asset;
mod cli;
mod config;
mod embed;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Init writes the config, so only the other commands load one
    let load = || AppConfig::load(&cli);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_config(&cli.config, name.as_deref(), *dry),
        Commands::Url { path, secure } => cli::url::print_url(&load()?, path, *secure),
        Commands::Version => cli::url::print_version(&load()?),
        Commands::Render { args } => cli::render::render_page(&load()?, args),
    }
}
