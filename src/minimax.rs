//! Minimax search over the Tic-Tac-Toe game tree

use rand::{Rng, prelude::IndexedRandom};

use crate::board::{BoardState, Player};

/// Result of a search: the chosen position and the score backing it up
///
/// `position` is `None` on terminal boards, where there is nothing left
/// to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Option<usize>,
    pub score: i32,
}

/// Score a terminal board from the optimizing player's perspective.
///
/// Wins are worth more the earlier they arrive: a win with `n` empty
/// cells left scores `n + 1`, a loss `-(n + 1)`, a full drawn board 0.
fn terminal_score(state: &BoardState, optimizing: Player) -> Option<i32> {
    if let Some(winner) = state.winner() {
        let margin = state.empty_positions().len() as i32 + 1;
        Some(if winner == optimizing { margin } else { -margin })
    } else if state.is_full() {
        Some(0)
    } else {
        None
    }
}

/// Depth-first minimax over all legal continuations.
///
/// The player to move maximizes when they are `optimizing` and
/// minimizes otherwise. Ties keep the first candidate in scan order,
/// so the result is deterministic for a given board. Speculation
/// happens on board copies; `state` is never mutated.
pub fn minimax(state: &BoardState, optimizing: Player) -> SearchOutcome {
    if let Some(score) = terminal_score(state, optimizing) {
        return SearchOutcome {
            position: None,
            score,
        };
    }

    let maximizing = state.to_move == optimizing;
    let mut best = SearchOutcome {
        position: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for position in state.legal_moves() {
        let next = state.make_move(position).expect("legal moves are playable");
        let continuation = minimax(&next, optimizing);

        let improves = if maximizing {
            continuation.score > best.score
        } else {
            continuation.score < best.score
        };
        if improves {
            best = SearchOutcome {
                position: Some(position),
                score: continuation.score,
            };
        }
    }

    best
}

/// Choose the best move for `optimizing` on `state`.
///
/// A completely empty board short-circuits to a uniformly random
/// opening move (variety, not correctness: every opening is sound for
/// the first player); every other position runs the full search.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) when the
/// board is terminal. The search otherwise assumes a well-formed board
/// reachable by legal play.
pub fn best_move<R: Rng>(
    state: &BoardState,
    optimizing: Player,
    rng: &mut R,
) -> crate::Result<usize> {
    let moves = state.legal_moves();
    if moves.len() == 9 {
        return moves.choose(rng).copied().ok_or(crate::Error::NoValidMoves);
    }

    minimax(state, optimizing)
        .position
        .ok_or(crate::Error::NoValidMoves)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn terminal_win_scores_empties_plus_one() {
        // X just completed the top row with four cells still empty
        let state = BoardState::from_string("XXX OO. ...").unwrap();
        let outcome = minimax(&state, Player::X);
        assert_eq!(outcome.position, None);
        assert_eq!(outcome.score, 5);

        let from_loser = minimax(&state, Player::O);
        assert_eq!(from_loser.score, -5);
    }

    #[test]
    fn full_board_without_winner_scores_zero() {
        let state = BoardState::from_string("XOX XXO OXO").unwrap();
        assert_eq!(state.winner(), None);
        let outcome = minimax(&state, Player::X);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn takes_the_immediate_win() {
        let state = BoardState::from_string("XX. OO. ...").unwrap();
        assert_eq!(state.to_move, Player::X);
        let outcome = minimax(&state, Player::X);
        assert_eq!(outcome.position, Some(2));
        assert_eq!(outcome.score, 5);
    }

    #[test]
    fn minimizing_side_prefers_the_slower_loss() {
        // O to move with X threatening the top row. Letting the threat
        // stand loses with 4 cells empty (-5 for O); blocking at 2
        // still loses to X's center double threat, but two plies later.
        let state = BoardState::from_string("XX. O.. ...").unwrap();
        assert_eq!(state.to_move, Player::O);
        let outcome = minimax(&state, Player::X);
        assert_eq!(outcome.position, Some(2), "O must block the open row");
        assert_eq!(outcome.score, 3);
    }

    #[test]
    fn tie_between_equal_wins_keeps_scan_order() {
        // X completes either the top row (2) or the left column (6)
        // for the same score; the first candidate found wins the tie
        let state = BoardState::from_string("XX. X.O .OO").unwrap();
        assert_eq!(state.to_move, Player::X);
        let outcome = minimax(&state, Player::X);
        assert_eq!(outcome.position, Some(2));
        assert_eq!(outcome.score, 3);
    }

    #[test]
    fn best_move_opens_randomly_but_legally() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty = BoardState::new();
        for _ in 0..20 {
            let pos = best_move(&empty, Player::X, &mut rng).unwrap();
            assert!(pos < 9);
        }
    }

    #[test]
    fn best_move_on_terminal_board_is_no_valid_moves() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = BoardState::from_string("XXX OO. ...").unwrap();
        let result = best_move(&state, Player::X, &mut rng);
        assert!(matches!(result, Err(crate::Error::NoValidMoves)));
    }
}
