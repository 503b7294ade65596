//! Engine for the classic game of Nim: four heaps of 1, 3, 5, and 7
//! matchsticks, a human against a computer opponent that plays the
//! nim-sum strategy.
//!
//! The stateful [`engine::Engine`] owns the game, validates moves, and
//! attributes the win to whoever took the last matchstick. Move selection for
//! the computer lives in [`strategy`], game arithmetic in [`position`] and
//! [`nimber`]. Rendering and input collection are left to a presentation
//! layer; the workspace ships a terminal one in `nim_cli`.

#![warn(missing_docs)]

pub mod engine;
pub mod moves;
pub mod nimber;
pub mod parsing;
pub mod position;
pub mod strategy;
