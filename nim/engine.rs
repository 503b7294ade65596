//! Stateful game engine driven by a presentation layer.
//!
//! The engine owns the position and remembers who moved last, but it does not
//! enforce turn order: the presentation layer sequences
//! human move, terminal check, computer move, terminal check, and can render
//! or animate between the calls.

use crate::{
    moves::{Move, MoveError},
    position::{HEAP_COUNT, Position},
    strategy,
};

/// Side making a move.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    /// The person at the controls
    Human,
    /// The computer opponent
    Ai,
}

impl Player {
    /// Opposite player
    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }
}

/// Game engine owning the position of a single human-versus-computer game.
///
/// Whoever takes the last matchstick wins, so the winner is simply the side
/// that moved last once the position is terminal.
#[derive(Debug, Clone)]
pub struct Engine {
    position: Position,
    last_mover: Option<Player>,
}

impl Engine {
    /// Create an engine holding the standard starting position
    pub const fn new() -> Self {
        Self {
            position: Position::standard(),
            last_mover: None,
        }
    }

    /// Restore the starting position and forget who moved last
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply `mv` on behalf of `mover`.
    ///
    /// Validates before mutating: on error the state is untouched. Returns
    /// the new heap snapshot on success.
    pub fn apply_move(&mut self, mover: Player, mv: Move) -> Result<[u32; HEAP_COUNT], MoveError> {
        if self.position.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let next = self.position.try_apply(mv)?;
        self.position = next;
        self.last_mover = Some(mover);
        Ok(next.heaps())
    }

    /// Pick the computer's reply to the current position.
    ///
    /// Pure query: the caller applies the move with [`Self::apply_move`].
    /// Fails with [`MoveError::GameOver`] on a terminal position.
    pub fn compute_ai_move(&self) -> Result<Move, MoveError> {
        strategy::best_move(&self.position)
    }

    /// Check if the game has ended
    pub fn is_terminal(&self) -> bool {
        self.position.is_terminal()
    }

    /// Snapshot of the heap sizes, heap 0 first
    pub fn heaps(&self) -> [u32; HEAP_COUNT] {
        self.position.heaps()
    }

    /// Current position as a value
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The side that took the last matchstick, `None` while the game is
    /// still running
    pub fn winner(&self) -> Option<Player> {
        if self.position.is_terminal() {
            self.last_mover
        } else {
            None
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
