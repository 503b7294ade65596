//! Move selection for the computer opponent.
//!
//! The computer plays the textbook nim-sum strategy: from a position with a
//! nonzero nim-sum it moves to a position with nim-sum zero, which the theory
//! guarantees is possible and winning. From a nim-sum-zero position no such
//! reply exists, so it gives up a single stick from the first nonempty row
//! and waits for a mistake.

use itertools::Itertools;

use crate::{
    moves::{Move, MoveError},
    position::{HEAP_COUNT, Position},
};

/// Pick the computer's reply to `position`.
///
/// Fails with [`MoveError::GameOver`] when the position is terminal; the
/// returned move is otherwise always legal.
pub fn best_move(position: &Position) -> Result<Move, MoveError> {
    if position.is_terminal() {
        return Err(MoveError::GameOver);
    }

    let heaps = position.heaps();
    let nim_sum = position.nim_sum().value();

    let chosen = if nim_sum == 0 {
        concession_move(&heaps)
    } else {
        winning_move(&heaps, nim_sum)
    };
    chosen.ok_or(MoveError::GameOver)
}

/// Losing position: every reply loses, so take a single stick from the first
/// nonempty row
fn concession_move(heaps: &[u32; HEAP_COUNT]) -> Option<Move> {
    let (heap, _) = heaps.iter().find_position(|&&sticks| sticks > 0)?;
    Some(Move { heap, take: 1 })
}

/// Winning position: the first row whose size xored with the nim-sum shrinks
/// can be cut down to exactly that xor, leaving the opponent at nim-sum zero
fn winning_move(heaps: &[u32; HEAP_COUNT], nim_sum: u32) -> Option<Move> {
    for (heap, &sticks) in heaps.iter().enumerate() {
        let target = sticks ^ nim_sum;
        if target >= sticks {
            continue;
        }

        let take = sticks - target;
        if take == sticks && heaps.iter().filter(|&&h| h == sticks).count() == 2 {
            // The optimal cut would empty one row of a tied pair. The game
            // instead nibbles a single stick off the first row of the pair,
            // even though that can give the win away.
            let heap = heaps.iter().position(|&h| h == sticks).unwrap_or(heap);
            return Some(Move { heap, take: 1 });
        }
        return Some(Move { heap, take });
    }
    None
}
