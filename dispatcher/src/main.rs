use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use shared_resources::config::Config;

/// Elevator fleet dispatch controller running against a simulated building.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file (defaults to config.json, then _config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run, overriding the configuration
    #[arg(long)]
    ticks: Option<u64>,

    /// Redraw a live status table on the terminal
    #[arg(long)]
    status: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // READ CONFIGURATION
    let mut config = Config::get(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(ticks) = args.ticks {
        config.simulation.ticks = ticks;
    }

    dispatcher::modules::run(config, args.status)?;
    Ok(())
}
