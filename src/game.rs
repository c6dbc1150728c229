//! Game records: moves, outcomes, and history

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress or finished, with full move history
///
/// The board lives for exactly one game: created at the start, mutated
/// only through [`play`](Game::play), and frozen once an outcome is
/// recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    initial: BoardState,
    state: BoardState,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a fresh game with X to move
    pub fn new() -> Self {
        Self::from_initial(BoardState::new())
    }

    /// Start a game from an arbitrary position
    pub fn from_initial(initial: BoardState) -> Self {
        Game {
            initial,
            state: initial,
            moves: Vec::new(),
            outcome: outcome_of(&initial),
        }
    }

    /// Play a move for the player whose turn it is
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once an
    /// outcome is recorded, and the board's rejection for occupied or
    /// out-of-range positions.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.state.to_move;
        self.state = self.state.make_move(position)?;
        self.moves.push(Move { position, player });
        self.outcome = outcome_of(&self.state);

        Ok(())
    }

    /// Current board state
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// The position the game started from
    pub fn initial(&self) -> BoardState {
        self.initial
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The outcome, once the game is finished
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_of(state: &BoardState) -> Option<GameOutcome> {
    if let Some(winner) = state.winner() {
        Some(GameOutcome::Win(winner))
    } else if state.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(4).unwrap();
        game.play(0).unwrap();

        assert_eq!(
            game.moves(),
            &[
                Move {
                    position: 4,
                    player: Player::X
                },
                Move {
                    position: 0,
                    player: Player::O
                },
            ]
        );
        assert_eq!(game.state().to_move, Player::X);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_outcome_set_on_win() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_play_after_game_over_is_rejected() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        let result = game.play(5);
        assert!(matches!(result, Err(crate::Error::GameOver)));
        assert_eq!(game.moves().len(), 5);
    }

    #[test]
    fn test_outcome_set_on_draw() {
        let mut game = Game::new();
        for pos in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_from_terminal_initial_is_already_over() {
        let board = BoardState::from_string("XXX OO. ...").unwrap();
        let mut game = Game::from_initial(board);
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(game.play(5).is_err());
    }
}
