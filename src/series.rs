//! Batch self-play between two configured agents

use serde::{Deserialize, Serialize};

use crate::{
    agents::{AgentKind, build_agent},
    board::Player,
    cli::output::create_series_progress,
    game::{Game, GameOutcome},
    session::Session,
};

/// Configuration for a self-play series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play
    pub games: usize,

    /// Agent controlling X
    pub x: AgentKind,

    /// Agent controlling O
    pub o: AgentKind,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 100,
            x: AgentKind::Engine,
            o: AgentKind::Engine,
            seed: None,
            progress: true,
        }
    }
}

/// Aggregated results of a series
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeriesResults {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Every played game with its full move history
    pub games: Vec<Game>,
}

impl SeriesResults {
    /// Serialize the results (tallies plus every game) to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn record(&mut self, game: Game) {
        match game.outcome() {
            Some(GameOutcome::Win(Player::X)) => self.x_wins += 1,
            Some(GameOutcome::Win(Player::O)) => self.o_wins += 1,
            Some(GameOutcome::Draw) => self.draws += 1,
            None => {}
        }
        self.games.push(game);
    }
}

/// Run a series of games between the configured agents.
///
/// Per-game seeds are derived from the series seed, so a seeded series
/// reproduces move-for-move.
///
/// # Errors
///
/// Rejects interactive agents (a series must run unattended) and
/// propagates agent failures.
pub fn run_series(config: &SeriesConfig) -> crate::Result<SeriesResults> {
    if config.x == AgentKind::Human || config.o == AgentKind::Human {
        return Err(crate::Error::InvalidConfiguration {
            message: "a self-play series requires non-interactive agents".to_string(),
        });
    }

    let base_seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let bar = config
        .progress
        .then(|| create_series_progress(config.games as u64));

    let mut results = SeriesResults::default();
    for index in 0..config.games {
        // Distinct seeds per game and per side
        let x_seed = base_seed.wrapping_add(2 * index as u64);
        let o_seed = x_seed.wrapping_add(1);

        let x = build_agent(config.x, Player::X, Some(x_seed));
        let o = build_agent(config.o, Player::O, Some(o_seed));
        let mut session = Session::new(x, o);
        session.play_to_end()?;
        results.record(session.into_game());

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    Ok(results)
}
