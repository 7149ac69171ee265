// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed limits of the puzzle.
//!
//! The peg count is derived from [`Peg`](super::Peg) so that the two can
//! never disagree.

use super::Peg;
use strum::EnumCount;

/// Number of pegs (rows) on the board.
pub const NPEGS: usize = Peg::COUNT;

/// Maximum number of discs a peg can hold, and the largest supported height.
///
/// The cap bounds output size and recursion depth; `2^100 - 1` moves is
/// already far beyond anything that will finish.
pub const MAX_HEIGHT: usize = 100;

/// Smallest tower accepted at startup.
pub const MIN_HEIGHT: usize = 2;

/// Peg holding the tower before a solve.
pub const SOURCE_PEG: Peg = Peg::Left;

/// Peg holding the tower after a solve.
pub const DESTINATION_PEG: Peg = Peg::Right;
