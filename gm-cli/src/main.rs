//! GM CLI - Command line access to the Gapminder dashboard engine.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gm-cli",
    version,
    about = "Gapminder dashboard toolkit"
)]
struct Cli {
    /// Gapminder-style CSV to load
    #[arg(short = 'd', long, default_value = "fixtures/gapminder.csv")]
    data: PathBuf,

    /// TOML file overriding dashboard defaults
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: gm_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = gm_cmd::load_config(cli.config.as_deref())?;
    log::debug!("Using dataset {}", cli.data.display());
    gm_cmd::run(cli.command, &cli.data, &config)
}
