//! Winning line analysis for the 3x3 board

use std::collections::HashSet;

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board
///
/// Checking membership in this fixed table is exhaustive by
/// construction; it replaces per-move shortcuts (like only testing the
/// diagonals from even cell indices) that do not generalize.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by owning a complete line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let mark = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&pos| cells[pos] == mark))
    }

    /// Find all positions that would immediately complete a line for
    /// the player (two own marks plus one empty cell in a line)
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> HashSet<usize> {
        let mark = player.to_cell();
        let mut moves = HashSet::new();

        for line in &WINNING_LINES {
            let mut owned = 0;
            let mut open = None;
            for &pos in line {
                if cells[pos] == mark {
                    owned += 1;
                } else if cells[pos] == Cell::Empty {
                    open = Some(pos);
                }
            }
            if owned == 2
                && let Some(pos) = open
            {
                moves.insert(pos);
            }
        }

        moves
    }
}
