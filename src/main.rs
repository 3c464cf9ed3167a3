//! sitemap-gen - render a sitemap manifest into sitemap files.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitemap_gen::cli::{Cli, Commands, build::build_sitemap, check::check_sitemap};
use sitemap_gen::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Build { .. } => build_sitemap(&cli).map(|_| ()),
        Commands::Check { .. } => check_sitemap(&cli),
    }
}
