// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-disc moves and auxiliary peg selection.
//!
//! These are the two primitives the recursive solver is built from. Neither
//! knows anything about recursion or observers.

use tracing::{trace, warn};

use crate::board::{Disc, Peg, NPEGS};
use crate::context::{Counters, SolveContext};
use crate::error::{HanoiError, Result};

/// Record of one single-disc move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscMove {
    pub source: Peg,
    pub destination: Peg,
    /// Disc that changed hands, `None` when the source was empty.
    pub disc: Option<Disc>,
    /// 1-based position of this move in the run.
    pub number: u128,
}

/// Move the top disc of `source` onto `destination`.
///
/// The move counter is incremented exactly once per call, whatever happens:
///
/// - `source == destination` relocates nothing but still counts;
/// - an empty `source` relocates nothing but still counts.
///
/// Neither case arises from a correct solve. Both are kept as counted moves
/// and reported through the `SelfMoves` and `EmptySourceMoves` counters.
///
/// # Panics
///
/// Panics if `destination` is full. Each peg holds up to `MAX_HEIGHT` discs
/// and a tower never exceeds that, so an overflow means the board is corrupt.
pub fn move_single_disc(ctx: &mut SolveContext, source: Peg, destination: Peg) -> DiscMove {
    let number = ctx.statistics.increment_counter(Counters::DiscMoves);

    if source == destination {
        ctx.statistics.increment_counter(Counters::SelfMoves);
        let disc = ctx.board.peg(source).top_disc_size();
        warn!(peg = %source, move_number = %number, "self move counted without relocating a disc");
        return DiscMove {
            source,
            destination,
            disc,
            number,
        };
    }

    let disc = match ctx.board.peg_mut(source).remove_top() {
        Ok(disc) => disc,
        Err(_) => {
            ctx.statistics.increment_counter(Counters::EmptySourceMoves);
            warn!(peg = %source, move_number = %number, "move from empty peg counted");
            return DiscMove {
                source,
                destination,
                disc: None,
                number,
            };
        }
    };

    if let Err(err) = ctx.board.peg_mut(destination).add_top(disc) {
        panic!("Invariant violation in move #{}: {}", number, err);
    }

    trace!(disc, %source, %destination, move_number = %number, "moved disc");
    DiscMove {
        source,
        destination,
        disc: Some(disc),
        number,
    }
}

/// Find the peg that is neither `deny1` nor `deny2`.
///
/// Scans indices starting just after `deny1`, wrapping modulo the peg count,
/// and returns the first one that is not denied.
///
/// # Errors
///
/// `InvalidArgument` if `deny1 == deny2`, since the answer would not be
/// unique.
pub fn select_auxiliary_row(deny1: Peg, deny2: Peg) -> Result<Peg> {
    if deny1 == deny2 {
        return Err(HanoiError::InvalidArgument(format!(
            "auxiliary row needs two distinct pegs, got {} twice",
            deny1
        )));
    }
    let mut candidate = deny1.index();
    loop {
        candidate = (candidate + 1) % NPEGS;
        if candidate != deny1.index() && candidate != deny2.index() {
            return Peg::from_index(candidate);
        }
    }
}
