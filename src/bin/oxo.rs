//! oxo CLI - Tic-Tac-Toe with a perfect-play minimax engine
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games against the engine (or any agent pairing)
//! - Running batch self-play series with reproducible seeds
//! - Exporting played games for further analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe with a perfect-play minimax engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(oxo::cli::commands::play::PlayArgs),

    /// Run a batch of games between two agents
    Selfplay(oxo::cli::commands::selfplay::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Selfplay(args) => oxo::cli::commands::selfplay::execute(args),
    }
}
