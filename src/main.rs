//! sitecfg - load, merge and validate a static blog's site configuration.

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::load_config};
use config::cfg;

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry } => cli::init::run_init(dir.as_deref(), *dry),
        Commands::Check => {
            let (patch, path) = load_config(&cli)?;
            let cwd = std::env::current_dir().unwrap_or_default();
            let shown = cli::common::display_path(&path, &cwd);
            cli::check::run_check(cfg(), &patch, &shown)
        }
        Commands::Show { merged, format } => {
            let (patch, _) = load_config(&cli)?;
            cli::show::run_show(cfg(), &patch, *merged, *format)
        }
        Commands::Footer { year } => {
            load_config(&cli)?;
            cli::footer::run_footer(cfg(), *year)
        }
    }
}
