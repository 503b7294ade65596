//! Nimber is the Grundy value of an impartial position.

use auto_ops::impl_op_ex;
use std::{fmt::Display, iter::Sum};

/// Grundy value of an impartial position.
///
/// Addition is overloaded to nimber addition, i.e. bitwise xor, so summing
/// the heap sizes of a Nim position yields its nim-sum.
#[repr(transparent)]
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nimber(u32);

impl Nimber {
    /// Construct new nimber
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying nimber value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check if the nimber is zero, i.e. a loss for the player to move
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Compute the minimum excluded value from a vector of nimbers.
    /// See <https://en.wikipedia.org/wiki/Mex_(mathematics)>
    pub fn mex(mut nimbers: Vec<Self>) -> Self {
        nimbers.sort_unstable();
        let mut mex = 0;
        for n in nimbers {
            if n.0 == mex {
                mex += 1;
            } else if n.0 > mex {
                break;
            }
        }
        Self(mex)
    }
}

impl From<u32> for Nimber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sum for Nimber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, n| acc + n)
    }
}

// xor is correct, that's how nimber addition works
impl_op_ex!(+|lhs: &Nimber, rhs: &Nimber| -> Nimber { Nimber(lhs.0 ^ rhs.0) });
impl_op_ex!(+=|lhs: &mut Nimber, rhs: &Nimber| { lhs.0 ^= rhs.0 });

// Subtraction is the same as addition
impl_op_ex!(-|lhs: &Nimber, rhs: &Nimber| -> Nimber { Nimber(lhs.0 ^ rhs.0) });
impl_op_ex!(-=|lhs: &mut Nimber, rhs: &Nimber| { lhs.0 ^= rhs.0 });

impl Display for Nimber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "0")
        } else if self.0 == 1 {
            write!(f, "*")
        } else {
            write!(f, "*{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mex_works() {
        assert_eq!(Nimber::mex(vec![]), Nimber::new(0));
        assert_eq!(
            Nimber::mex(vec![Nimber::new(0), Nimber::new(1), Nimber::new(2)]),
            Nimber::new(3)
        );
        assert_eq!(
            Nimber::mex(vec![Nimber::new(1), Nimber::new(2), Nimber::new(5)]),
            Nimber::new(0)
        );
        assert_eq!(
            Nimber::mex(vec![
                Nimber::new(0),
                Nimber::new(0),
                Nimber::new(1),
                Nimber::new(3)
            ]),
            Nimber::new(2)
        );
    }

    #[test]
    fn sum_is_xor() {
        let nim_sum = [1, 3, 5, 7].into_iter().map(Nimber::new).sum::<Nimber>();
        assert!(nim_sum.is_zero());

        let nim_sum = [3, 5, 7].into_iter().map(Nimber::new).sum::<Nimber>();
        assert_eq!(nim_sum, Nimber::new(1));

        assert_eq!(Nimber::new(5) + Nimber::new(3), Nimber::new(6));
        assert_eq!(Nimber::new(5) - Nimber::new(3), Nimber::new(6));
    }

    #[test]
    fn star_notation() {
        assert_eq!(Nimber::new(0).to_string(), "0");
        assert_eq!(Nimber::new(1).to_string(), "*");
        assert_eq!(Nimber::new(4).to_string(), "*4");
    }
}
