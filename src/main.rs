//! Energy Dash - Main Entry Point
//!
//! Terminal client for the energy consumption forecasting service

use clap::Parser;
use energy_dash::app::application::run_app;
use energy_dash::app::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_app(cli)
}
