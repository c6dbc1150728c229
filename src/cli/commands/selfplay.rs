//! Selfplay command - batch games between two agents

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    agents::AgentKind,
    cli::output,
    series::{SeriesConfig, run_series},
};

#[derive(Parser, Debug)]
#[command(about = "Run a batch of games between two agents")]
pub struct SelfPlayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Agent controlling X
    #[arg(long, value_enum, default_value_t = AgentKind::Engine)]
    pub x: AgentKind,

    /// Agent controlling O
    #[arg(long, value_enum, default_value_t = AgentKind::Engine)]
    pub o: AgentKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the played games to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let config = SeriesConfig {
        games: args.games,
        x: args.x,
        o: args.o,
        seed: args.seed,
        progress: !args.no_progress,
    };

    let results = run_series(&config)?;

    output::print_section("Series results");
    output::print_kv("Matchup", &format!("{} (X) vs {} (O)", config.x, config.o));
    output::print_kv("Games", &results.games.len().to_string());
    output::print_kv("X wins", &results.x_wins.to_string());
    output::print_kv("O wins", &results.o_wins.to_string());
    output::print_kv("Draws", &results.draws.to_string());

    if let Some(path) = args.export {
        let json = results.to_json()?;
        fs::write(&path, json)
            .with_context(|| format!("write games to {}", path.display()))?;
        println!("\nExported {} games to {}", results.games.len(), path.display());
    }

    Ok(())
}
