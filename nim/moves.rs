//! Moves and the reasons the engine rejects them.

use std::fmt::Display;
use thiserror::Error;

/// A single Nim move: take `take` matchsticks from heap `heap`.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Heap index, `0..4`
    pub heap: usize,
    /// Number of matchsticks to take, at least 1
    pub take: u32,
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Rows are numbered from 1 for people
        if self.take == 1 {
            write!(f, "1 matchstick from row {}", self.heap + 1)
        } else {
            write!(f, "{} matchsticks from row {}", self.take, self.heap + 1)
        }
    }
}

/// Why a move or a query was rejected.
///
/// Every variant is recoverable: the game state is left untouched and the
/// caller may retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Selected heap does not exist
    #[error("no such row")]
    InvalidRow,

    /// Take count is zero or larger than the selected heap
    #[error("cannot take {take} matchstick(s) from a row holding {available}")]
    InvalidCount {
        /// Requested number of matchsticks
        take: u32,
        /// Matchsticks actually left in the selected row
        available: u32,
    },

    /// The game has ended, no move is possible
    #[error("the game is already over")]
    GameOver,
}
