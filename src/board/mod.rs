// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The board: three pegs and the discs stacked on them.
//!
//! - Peg: identifier of a row (0..NPEGS-1)
//! - PegStack: fixed-capacity stack of discs on one peg
//! - Board: the three pegs of one puzzle instance
//! - Snapshot: owned copy of the layout, for observation and results
//!
//! A `Board` is owned by the caller (normally inside a
//! [`SolveContext`](crate::context::SolveContext)), so independent puzzles
//! never share state.

pub mod constants;
pub mod peg;

pub use constants::*;
pub use peg::{Disc, Peg, PegStack};

use crate::config::Height;
use strum::IntoEnumIterator;

/// Layout of all three pegs at one moment, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pegs: [Vec<Disc>; NPEGS],
}

impl Snapshot {
    /// Build a snapshot from explicit layouts (mostly for tests).
    pub fn from_layout(pegs: [Vec<Disc>; NPEGS]) -> Self {
        Self { pegs }
    }

    /// Discs on the given peg, bottom first.
    pub fn peg(&self, peg: Peg) -> &[Disc] {
        &self.pegs[peg.index()]
    }

    /// Total number of discs across all pegs.
    pub fn disc_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    pub fn into_layout(self) -> [Vec<Disc>; NPEGS] {
        self.pegs
    }
}

/// The three pegs of one puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pegs: [PegStack; NPEGS],
}

impl Board {
    /// Create a board with three empty pegs.
    pub fn new() -> Self {
        Self {
            pegs: [
                PegStack::new(Peg::Left),
                PegStack::new(Peg::Middle),
                PegStack::new(Peg::Right),
            ],
        }
    }

    /// Create a board with the full tower of `height` discs on the source peg.
    pub fn with_tower(height: Height) -> Self {
        let mut board = Self::new();
        board.pegs[SOURCE_PEG.index()] = PegStack::tower(SOURCE_PEG, height.get());
        board
    }

    pub fn peg(&self, peg: Peg) -> &PegStack {
        &self.pegs[peg.index()]
    }

    pub fn peg_mut(&mut self, peg: Peg) -> &mut PegStack {
        &mut self.pegs[peg.index()]
    }

    /// Iterate over the pegs in index order.
    pub fn pegs(&self) -> impl Iterator<Item = &PegStack> {
        self.pegs.iter()
    }

    /// Copy out the current layout.
    ///
    /// Two calls with no move in between return equal snapshots.
    pub fn snapshot(&self) -> Snapshot {
        let mut layout: [Vec<Disc>; NPEGS] = Default::default();
        for peg in Peg::iter() {
            layout[peg.index()] = self.peg(peg).discs().to_vec();
        }
        Snapshot { pegs: layout }
    }

    /// Total number of discs on the board.
    pub fn disc_count(&self) -> usize {
        self.pegs.iter().map(PegStack::len).sum()
    }

    /// Size of the largest disc anywhere on the board, 0 if there are none.
    pub fn tallest_disc(&self) -> Disc {
        self.pegs
            .iter()
            .flat_map(|peg| peg.discs().iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// True if every peg is strictly descending from bottom to top.
    pub fn is_legal(&self) -> bool {
        self.pegs.iter().all(PegStack::is_descending)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
