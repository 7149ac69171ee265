// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and bumped by the mover and solver.
//! `DiscMoves` is the move counter reported to callers; the others are
//! diagnostics.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Calls to `move_single_disc`, including ones that relocate nothing.
    DiscMoves,
    /// Invocations of the recursive transfer.
    Transfers,
    /// Moves whose source and destination are the same peg.
    SelfMoves,
    /// Moves attempted from an empty peg.
    EmptySourceMoves,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u128; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1 and return the new value.
    pub(crate) fn increment_counter(&mut self, counter: Counters) -> u128 {
        let slot = &mut self.stats[counter as usize];
        *slot += 1;
        *slot
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u128 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}
