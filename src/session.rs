//! Turn-loop driver alternating two agents over one game

use crate::{
    agents::Agent,
    board::{BoardState, Player},
    game::{Game, GameOutcome},
};

/// Driver state between turns
///
/// `Won` and `Draw` are terminal; from `ToMove` the session requests a
/// move from that player's agent and applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    ToMove(Player),
    Won(Player),
    Draw,
}

impl SessionState {
    /// Derive the driver state from a board
    pub fn of(state: &BoardState) -> Self {
        if let Some(winner) = state.winner() {
            SessionState::Won(winner)
        } else if state.is_full() {
            SessionState::Draw
        } else {
            SessionState::ToMove(state.to_move)
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::ToMove(_))
    }
}

/// One applied move and the state it led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub position: usize,
    pub state: SessionState,
}

/// A single game driven between two agents
///
/// The session owns the board for the lifetime of one game; agents
/// only ever see copies.
pub struct Session {
    game: Game,
    x: Box<dyn Agent>,
    o: Box<dyn Agent>,
}

impl Session {
    /// Start a session from the standard empty board
    pub fn new(x: Box<dyn Agent>, o: Box<dyn Agent>) -> Self {
        Self::with_game(Game::new(), x, o)
    }

    /// Start a session from an existing game (possibly mid-position)
    pub fn with_game(game: Game, x: Box<dyn Agent>, o: Box<dyn Agent>) -> Self {
        Session { game, x, o }
    }

    /// Current board
    pub fn board(&self) -> BoardState {
        self.game.state()
    }

    /// Current driver state
    pub fn state(&self) -> SessionState {
        SessionState::of(&self.game.state())
    }

    /// The underlying game record
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session, keeping the game record
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Request a move from the agent to move and apply it
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) when called
    /// on a finished game, and propagates agent failures and illegal
    /// agent moves.
    pub fn step(&mut self) -> crate::Result<Turn> {
        let board = self.game.state();
        let player = match SessionState::of(&board) {
            SessionState::ToMove(player) => player,
            _ => return Err(crate::Error::GameOver),
        };

        let agent = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        let position = agent.choose_move(&board)?;
        self.game.play(position)?;

        Ok(Turn {
            player,
            position,
            state: self.state(),
        })
    }

    /// Drive the game to completion
    pub fn play_to_end(&mut self) -> crate::Result<GameOutcome> {
        loop {
            match self.state() {
                SessionState::Won(player) => return Ok(GameOutcome::Win(player)),
                SessionState::Draw => return Ok(GameOutcome::Draw),
                SessionState::ToMove(_) => {
                    self.step()?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Plays a fixed move sequence; for driving known games in tests
    struct ScriptedAgent {
        moves: VecDeque<usize>,
    }

    impl ScriptedAgent {
        fn new(moves: &[usize]) -> Box<dyn Agent> {
            Box::new(ScriptedAgent {
                moves: moves.iter().copied().collect(),
            })
        }
    }

    impl Agent for ScriptedAgent {
        fn choose_move(&mut self, _state: &BoardState) -> crate::Result<usize> {
            self.moves.pop_front().ok_or(crate::Error::NoValidMoves)
        }
    }

    #[test]
    fn transitions_to_won_when_a_line_completes() {
        let x = ScriptedAgent::new(&[0, 1, 2]);
        let o = ScriptedAgent::new(&[3, 4]);
        let mut session = Session::new(x, o);

        assert_eq!(session.state(), SessionState::ToMove(Player::X));

        let outcome = session.play_to_end().unwrap();
        assert_eq!(outcome, GameOutcome::Win(Player::X));
        assert_eq!(session.state(), SessionState::Won(Player::X));
        assert_eq!(session.game().moves().len(), 5);
    }

    #[test]
    fn transitions_to_draw_on_a_full_board() {
        let x = ScriptedAgent::new(&[0, 2, 3, 5, 7]);
        let o = ScriptedAgent::new(&[1, 4, 6, 8]);
        let mut session = Session::new(x, o);

        let outcome = session.play_to_end().unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(session.state(), SessionState::Draw);
    }

    #[test]
    fn step_alternates_players() {
        let x = ScriptedAgent::new(&[0, 2]);
        let o = ScriptedAgent::new(&[4]);
        let mut session = Session::new(x, o);

        assert_eq!(session.step().unwrap().player, Player::X);
        assert_eq!(session.step().unwrap().player, Player::O);
        assert_eq!(session.step().unwrap().player, Player::X);
    }

    #[test]
    fn stepping_a_finished_game_is_rejected() {
        let x = ScriptedAgent::new(&[0, 1, 2]);
        let o = ScriptedAgent::new(&[3, 4]);
        let mut session = Session::new(x, o);
        session.play_to_end().unwrap();

        let result = session.step();
        assert!(matches!(result, Err(crate::Error::GameOver)));
    }

    #[test]
    fn illegal_scripted_move_surfaces_the_board_error() {
        let x = ScriptedAgent::new(&[0, 0]);
        let o = ScriptedAgent::new(&[4]);
        let mut session = Session::new(x, o);

        session.step().unwrap();
        session.step().unwrap();
        let result = session.step();
        assert!(matches!(result, Err(crate::Error::InvalidMove { .. })));
    }
}
