//! Goalie CLI - penalty shootout against a Q-learning goalkeeper
//!
//! This CLI provides:
//! - Simulating rounds against scripted shooters
//! - Playing interactive rounds from the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "goalie")]
#[command(version, about = "Q-learning goalkeeper for a penalty shootout mini-game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate rounds against a scripted shooter
    Simulate(goalie::cli::commands::simulate::SimulateArgs),

    /// Shoot penalties interactively
    Play(goalie::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => goalie::cli::commands::simulate::execute(args),
        Commands::Play(args) => goalie::cli::commands::play::execute(args),
    }
}
