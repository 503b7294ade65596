//! Four-heap Nim position and its game arithmetic.

use std::{collections::HashMap, fmt::Display};

use itertools::Itertools;

use crate::{
    moves::{Move, MoveError},
    nimber::Nimber,
    parsing::{Parser, impl_from_str_via_parser},
};

/// Number of heaps in play.
pub const HEAP_COUNT: usize = 4;

/// Heap sizes at the start of the game.
pub const INITIAL_HEAPS: [u32; HEAP_COUNT] = [1, 3, 5, 7];

/// Position of the four-heap game.
///
/// Heap `i` never exceeds its starting size `INITIAL_HEAPS[i]`; positions
/// violating that bound cannot be constructed. Parsed from and displayed as
/// `1/3/5/7` literals.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    heaps: [u32; HEAP_COUNT],
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heaps.iter().format("/"))
    }
}

impl Position {
    /// The starting position, heaps of 1, 3, 5, and 7 matchsticks
    #[inline]
    pub const fn standard() -> Self {
        Self {
            heaps: INITIAL_HEAPS,
        }
    }

    /// Create a position from explicit heap sizes, `None` if any heap
    /// exceeds its starting size
    pub fn new(heaps: [u32; HEAP_COUNT]) -> Option<Self> {
        let within_bounds = heaps
            .iter()
            .zip(INITIAL_HEAPS)
            .all(|(&heap, initial)| heap <= initial);
        within_bounds.then_some(Self { heaps })
    }

    /// Snapshot of the heap sizes, heap 0 first
    #[inline]
    pub const fn heaps(self) -> [u32; HEAP_COUNT] {
        self.heaps
    }

    /// Matchsticks left in heap `heap`, or `None` if there is no such heap
    pub fn heap(self, heap: usize) -> Option<u32> {
        self.heaps.get(heap).copied()
    }

    /// Check if the game has ended, i.e. every heap is empty
    pub fn is_terminal(self) -> bool {
        self.heaps.iter().all(|&sticks| sticks == 0)
    }

    /// Nim-sum of the position: xor of all heap sizes.
    ///
    /// Zero means the player to move loses under optimal play.
    pub fn nim_sum(self) -> Nimber {
        self.heaps.iter().copied().map(Nimber::new).sum()
    }

    /// Apply `mv`, returning the resulting position.
    ///
    /// Validation happens before anything else, so an error never produces a
    /// partially applied move.
    pub fn try_apply(self, mv: Move) -> Result<Self, MoveError> {
        let Some(&available) = self.heaps.get(mv.heap) else {
            return Err(MoveError::InvalidRow);
        };
        if mv.take == 0 || mv.take > available {
            return Err(MoveError::InvalidCount {
                take: mv.take,
                available,
            });
        }
        let mut heaps = self.heaps;
        heaps[mv.heap] -= mv.take;
        Ok(Self { heaps })
    }

    /// All positions reachable in a single move
    pub fn moves(self) -> Vec<Self> {
        let mut moves = Vec::with_capacity(self.heaps.iter().sum::<u32>() as usize);
        for (heap, &sticks) in self.heaps.iter().enumerate() {
            for take in 1..=sticks {
                let mut heaps = self.heaps;
                heaps[heap] -= take;
                moves.push(Self { heaps });
            }
        }
        moves
    }

    /// Grundy value computed by mex recursion over the move graph.
    ///
    /// Equal to [`Self::nim_sum`] by the Sprague-Grundy theorem; computed
    /// independently of it so the two can be checked against each other.
    pub fn grundy_value(self) -> Nimber {
        let mut cache = HashMap::with_hasher(ahash::RandomState::new());
        self.grundy_value_cached(&mut cache)
    }

    fn grundy_value_cached(self, cache: &mut HashMap<Self, Nimber, ahash::RandomState>) -> Nimber {
        if let Some(&value) = cache.get(&self) {
            return value;
        }
        let moves = self.moves();
        let mut values = Vec::with_capacity(moves.len());
        for position in moves {
            values.push(position.grundy_value_cached(cache));
        }
        let value = Nimber::mex(values);
        cache.insert(self, value);
        value
    }

    pub(crate) fn parse(p: Parser<'_>) -> Option<(Parser<'_>, Self)> {
        let mut heaps = [0; HEAP_COUNT];
        let mut p = p.trim_whitespace();
        for (idx, heap) in heaps.iter_mut().enumerate() {
            if idx != 0 {
                p = p.parse_ascii_char('/')?;
            }
            let (rest, sticks) = p.trim_whitespace().parse_u32()?;
            *heap = sticks;
            p = rest.trim_whitespace();
        }
        let position = Self::new(heaps)?;
        Some((p, position))
    }
}

impl_from_str_via_parser!(Position);

/// Every position of the fixed four-heap game, all 2*4*6*8 of them
#[cfg(test)]
pub(crate) fn all_positions() -> impl Iterator<Item = Position> {
    itertools::iproduct!(0..=1, 0..=3, 0..=5, 0..=7)
        .map(|(a, b, c, d)| Position::new([a, b, c, d]).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};
    use std::str::FromStr;

    impl Arbitrary for Position {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut heaps = [0; HEAP_COUNT];
            for (heap, initial) in heaps.iter_mut().zip(INITIAL_HEAPS) {
                *heap = u32::arbitrary(g) % (initial + 1);
            }
            Self::new(heaps).unwrap()
        }
    }

    #[test]
    fn standard_position() {
        assert_eq!(Position::standard().heaps(), [1, 3, 5, 7]);
        assert!(!Position::standard().is_terminal());
        assert!(Position::standard().nim_sum().is_zero());
    }

    #[test]
    fn bounds_are_enforced() {
        assert!(Position::new([1, 3, 5, 7]).is_some());
        assert!(Position::new([0, 0, 0, 0]).is_some());
        assert!(Position::new([2, 3, 5, 7]).is_none());
        assert!(Position::new([0, 0, 0, 8]).is_none());
    }

    #[test]
    fn apply_reduces_selected_heap_only() {
        for heap in 0..HEAP_COUNT {
            for take in 1..=INITIAL_HEAPS[heap] {
                let before = Position::standard();
                let after = before.try_apply(Move { heap, take }).unwrap();
                for (idx, (b, a)) in before.heaps().into_iter().zip(after.heaps()).enumerate() {
                    if idx == heap {
                        assert_eq!(a, b - take);
                    } else {
                        assert_eq!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn apply_rejects_bad_rows() {
        let position = Position::standard();
        assert_eq!(
            position.try_apply(Move { heap: 4, take: 1 }),
            Err(MoveError::InvalidRow)
        );
        assert_eq!(
            position.try_apply(Move {
                heap: usize::MAX,
                take: 1
            }),
            Err(MoveError::InvalidRow)
        );
    }

    #[test]
    fn apply_rejects_bad_counts() {
        let position = Position::standard();
        assert_eq!(
            position.try_apply(Move { heap: 1, take: 0 }),
            Err(MoveError::InvalidCount {
                take: 0,
                available: 3
            })
        );
        assert_eq!(
            position.try_apply(Move { heap: 1, take: 4 }),
            Err(MoveError::InvalidCount {
                take: 4,
                available: 3
            })
        );

        let empty = Position::new([0, 0, 0, 0]).unwrap();
        assert_eq!(
            empty.try_apply(Move { heap: 0, take: 1 }),
            Err(MoveError::InvalidCount {
                take: 1,
                available: 0
            })
        );
    }

    #[test]
    fn terminal_iff_no_sticks_left() {
        for position in all_positions() {
            let total = position.heaps().iter().sum::<u32>();
            assert_eq!(position.is_terminal(), total == 0);
        }
    }

    #[test]
    fn moves_enumerate_every_take() {
        let position = Position::standard();
        let moves = position.moves();
        assert_eq!(moves.len(), 16);
        assert!(
            moves
                .iter()
                .all(|p| p.heaps().iter().sum::<u32>() < 16)
        );

        assert!(Position::new([0, 0, 0, 0]).unwrap().moves().is_empty());
        assert_eq!(
            Position::new([0, 1, 0, 0]).unwrap().moves(),
            vec![Position::new([0, 0, 0, 0]).unwrap()]
        );
    }

    #[test]
    fn grundy_value_matches_nim_sum_everywhere() {
        for position in all_positions() {
            assert_eq!(position.grundy_value(), position.nim_sum(), "{position}");
        }
    }

    #[test]
    fn parses_and_displays_literals() {
        let position = Position::from_str("1/3/5/7").unwrap();
        assert_eq!(position, Position::standard());
        assert_eq!(position.to_string(), "1/3/5/7");

        assert_eq!(
            Position::from_str(" 0 / 2 / 5 / 1 ").unwrap().heaps(),
            [0, 2, 5, 1]
        );

        assert!(Position::from_str("1/3/5").is_err());
        assert!(Position::from_str("1/3/5/7/9").is_err());
        assert!(Position::from_str("2/3/5/7").is_err());
        assert!(Position::from_str("one/3/5/7").is_err());
        assert!(Position::from_str("").is_err());
    }

    #[test]
    fn parsing_round_trips() {
        let mut qc = quickcheck::QuickCheck::new();
        let test = |position: Position| {
            assert_eq!(Position::from_str(&position.to_string()).unwrap(), position);
        };
        qc.quickcheck(test as fn(Position));
    }
}
