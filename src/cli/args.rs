//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Cache-busting asset URLs for static files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "vasset.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Override `app.asset_version` for this run
    #[arg(long, global = true, value_name = "TOKEN")]
    pub asset_version: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented vasset.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Print the versioned URL of an asset
    #[command(visible_alias = "u")]
    Url {
        /// Asset path relative to the public root (e.g., assets/css/app.css)
        path: String,

        /// Force https (`--secure`) or http (`--secure=false`)
        #[arg(
            short,
            long,
            action = clap::ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true",
            require_equals = true
        )]
        secure: Option<bool>,
    },

    /// Print the current asset version token
    #[command(visible_alias = "v")]
    Version,

    /// Render the application layout
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Page title (default: app.name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// HTML file inserted as page content. Use `-` to read stdin.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// HTML file pushed into the <head> after the stylesheets
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub styles: Option<PathBuf>,

    /// HTML file pushed into the <body> after the scripts
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub scripts: Option<PathBuf>,

    /// Value of the csrf-token meta tag
    #[arg(long, value_name = "TOKEN")]
    pub csrf_token: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
