// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Peg identifiers and the fixed-capacity disc stack held by each peg.

use std::fmt;

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use super::constants::{MAX_HEIGHT, NPEGS};
use crate::error::{HanoiError, Result};

/// Size of a disc. Larger values are wider discs.
pub type Disc = u8;

/// One of the three rows of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Peg {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl Peg {
    /// Get the peg as a usize (for array indexing).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a peg by its numeric index.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Peg::Left),
            1 => Ok(Peg::Middle),
            2 => Ok(Peg::Right),
            _ => Err(HanoiError::InvalidArgument(format!(
                "peg index {} out of range 0..{}",
                index, NPEGS
            ))),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// The discs on one peg, bottom to top.
///
/// Storage is a fixed array of `MAX_HEIGHT` slots and a fill count, so a peg
/// never allocates. The stack does not check that discs are placed in
/// descending order; keeping the board legal is the solver's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegStack {
    id: Peg,
    discs: [Disc; MAX_HEIGHT],
    /// Where the next disc would be placed.
    len: usize,
}

impl PegStack {
    /// Create an empty peg.
    pub fn new(id: Peg) -> Self {
        Self {
            id,
            discs: [0; MAX_HEIGHT],
            len: 0,
        }
    }

    /// Create a peg holding the full tower `height, height - 1, ..., 1`.
    ///
    /// # Panics
    ///
    /// Panics if `height > MAX_HEIGHT`; callers pass a validated height.
    pub(crate) fn tower(id: Peg, height: usize) -> Self {
        assert!(height <= MAX_HEIGHT, "Tower height out of range: {}", height);
        let mut peg = Self::new(id);
        for (slot, disc) in peg.discs.iter_mut().zip((1..=height).rev()) {
            *slot = disc as Disc;
        }
        peg.len = height;
        peg
    }

    pub fn id(&self) -> Peg {
        self.id
    }

    /// Number of discs on the peg.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discs currently present, bottom first.
    pub fn discs(&self) -> &[Disc] {
        &self.discs[..self.len]
    }

    /// Size of the top disc, or `None` when the peg is empty.
    pub fn top_disc_size(&self) -> Option<Disc> {
        self.discs().last().copied()
    }

    /// Remove and return the top disc.
    ///
    /// # Errors
    ///
    /// `StackUnderflow` if the peg is empty.
    pub fn remove_top(&mut self) -> Result<Disc> {
        if self.len == 0 {
            return Err(HanoiError::StackUnderflow { peg: self.id });
        }
        self.len -= 1;
        let disc = self.discs[self.len];
        self.discs[self.len] = 0;
        Ok(disc)
    }

    /// Place a disc on top. Ordering is not checked.
    ///
    /// # Errors
    ///
    /// `StackOverflow` if the peg already holds `MAX_HEIGHT` discs.
    pub fn add_top(&mut self, disc: Disc) -> Result<()> {
        if self.len >= MAX_HEIGHT {
            return Err(HanoiError::StackOverflow {
                peg: self.id,
                capacity: MAX_HEIGHT,
                disc,
            });
        }
        self.discs[self.len] = disc;
        self.len += 1;
        Ok(())
    }

    /// True if every disc sits on a strictly larger one.
    pub fn is_descending(&self) -> bool {
        self.discs().windows(2).all(|pair| pair[0] > pair[1])
    }
}
