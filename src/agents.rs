//! Player strategies behind a common trait

use std::{
    fmt,
    io::{self, BufRead, BufReader, Stdin},
};

use clap::ValueEnum;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardState, Player},
    minimax::best_move,
};

/// A strategy that can choose a move on a given board
///
/// Implementations are called exactly when it is their turn, so
/// `state.to_move` is the mark they play.
pub trait Agent {
    /// Choose a legal move for the current position
    ///
    /// # Errors
    ///
    /// Returns an error only for hard failures (no moves left,
    /// exhausted input stream); recoverable input problems are handled
    /// internally.
    fn choose_move(&mut self, state: &BoardState) -> crate::Result<usize>;
}

/// Selectable agent kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Interactive play over stdin
    Human,
    /// Perfect-play minimax engine
    Engine,
    /// Uniformly random legal moves
    Random,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Human => "human",
            AgentKind::Engine => "engine",
            AgentKind::Random => "random",
        };
        write!(f, "{name}")
    }
}

/// Construct an agent of the requested kind playing `player`
pub fn build_agent(kind: AgentKind, player: Player, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Human => Box::new(HumanAgent::from_stdin()),
        AgentKind::Engine => Box::new(EngineAgent::new(player, seed)),
        AgentKind::Random => Box::new(RandomAgent::new(seed)),
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

/// Perfect-play agent backed by the minimax search
pub struct EngineAgent {
    player: Player,
    rng: StdRng,
}

impl EngineAgent {
    /// Create an engine playing `player`, seeded for reproducible
    /// opening moves
    pub fn new(player: Player, seed: Option<u64>) -> Self {
        EngineAgent {
            player,
            rng: seeded_rng(seed),
        }
    }
}

impl Agent for EngineAgent {
    fn choose_move(&mut self, state: &BoardState) -> crate::Result<usize> {
        best_move(state, self.player, &mut self.rng)
    }
}

/// Baseline agent choosing uniformly among the empty cells
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        RandomAgent {
            rng: seeded_rng(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, state: &BoardState) -> crate::Result<usize> {
        let moves = state.legal_moves();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }
}

/// Interactive agent reading moves from a line-based input stream
///
/// Non-integer, out-of-range, and occupied inputs are rejected with a
/// re-prompt and never surface as errors. The only hard failure on
/// this path is the input stream running dry.
pub struct HumanAgent<R> {
    input: R,
}

impl HumanAgent<BufReader<Stdin>> {
    /// Interactive agent over stdin
    pub fn from_stdin() -> Self {
        HumanAgent {
            input: BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> HumanAgent<R> {
    /// Interactive agent over an arbitrary input stream
    pub fn new(input: R) -> Self {
        HumanAgent { input }
    }
}

impl<R: BufRead> Agent for HumanAgent<R> {
    fn choose_move(&mut self, state: &BoardState) -> crate::Result<usize> {
        let legal = state.legal_moves();

        loop {
            println!("Your turn. Input move (0-8):");

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| crate::Error::Io {
                    operation: "read move from input".to_string(),
                    source,
                })?;
            if read == 0 {
                return Err(crate::Error::InputExhausted);
            }

            match line.trim().parse::<usize>() {
                Ok(position) if legal.contains(&position) => return Ok(position),
                _ => println!("Invalid or occupied square. Try again."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn engine_blocks_an_open_row() {
        let state = BoardState::from_string("XX. O.. ...").unwrap();
        assert_eq!(state.to_move, Player::O);

        let mut engine = EngineAgent::new(Player::O, Some(7));
        assert_eq!(engine.choose_move(&state).unwrap(), 2);
    }

    #[test]
    fn random_agent_only_plays_legal_moves() {
        let state = BoardState::from_string("XOX .O. X..").unwrap();
        let mut agent = RandomAgent::new(Some(3));
        for _ in 0..50 {
            let pos = agent.choose_move(&state).unwrap();
            assert!(state.is_empty(pos), "position {pos} should be empty");
        }
    }

    #[test]
    fn human_agent_retries_until_input_is_valid() {
        let state = BoardState::new().make_move(4).unwrap();
        // Garbage, out of range, occupied, then a valid square
        let mut agent = HumanAgent::new(Cursor::new("abc\n12\n4\n0\n"));
        assert_eq!(agent.choose_move(&state).unwrap(), 0);
    }

    #[test]
    fn human_agent_reports_exhausted_input() {
        let state = BoardState::new();
        let mut agent = HumanAgent::new(Cursor::new("not-a-number\n"));
        let result = agent.choose_move(&state);
        assert!(matches!(result, Err(crate::Error::InputExhausted)));
    }

    #[test]
    fn seeded_engines_repeat_their_opening() {
        let empty = BoardState::new();
        let first = EngineAgent::new(Player::X, Some(11))
            .choose_move(&empty)
            .unwrap();
        let second = EngineAgent::new(Player::X, Some(11))
            .choose_move(&empty)
            .unwrap();
        assert_eq!(first, second);
    }
}
