// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive three-peg solver.
//!
//! # Algorithm
//!
//! To move `count` discs from `source` to `destination`:
//!
//! 1. If `count == 1`, move the disc directly.
//! 2. Otherwise pick the auxiliary peg (the one that is neither source nor
//!    destination), move the top `count - 1` discs there, move the largest
//!    disc to `destination`, then move the `count - 1` discs from the
//!    auxiliary peg on top of it.
//!
//! A tower of height `h` takes exactly `2^h - 1` single-disc moves. Recursion
//! depth equals `count`, which the height cap keeps at or below `MAX_HEIGHT`.
//!
//! # Events
//!
//! Each transfer call reports `TransferStarted` on entry, `DiscMoved` for the
//! one move it makes itself, and `TransferFinished` on exit. Nested calls
//! report their own events in between.

pub mod observer;

pub use observer::{MovePhase, NullObserver, Observer, SolveEvent, Transfer};

use tracing::{debug, info};

use crate::board::{Board, Peg, Snapshot, DESTINATION_PEG, SOURCE_PEG};
use crate::config::Height;
use crate::context::{Counters, SolveContext};
use crate::error::{HanoiError, Result};
use crate::mover::{move_single_disc, select_auxiliary_row};

/// Outcome of a full solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub height: Height,
    /// Total single-disc moves, always `2^height - 1`.
    pub moves: u128,
    /// Total transfer calls, including the top-level one.
    pub transfers: u128,
    /// Board layout after the last move.
    pub final_layout: Snapshot,
}

/// Number of single-disc moves needed for a tower of `height` discs.
pub fn expected_moves(height: Height) -> u128 {
    (1u128 << height.get()) - 1
}

/// Solve the puzzle held by `ctx`.
///
/// Rebuilds the full tower on the source peg and resets the counters, then
/// moves the whole tower to the destination peg. Whatever layout the context
/// held before is discarded, so repeated solves on one context agree.
///
/// # Errors
///
/// Only the errors of [`transfer`]; none occur for a context built from a
/// validated height.
pub fn solve<O>(ctx: &mut SolveContext, observer: &mut O) -> Result<SolveReport>
where
    O: Observer + ?Sized,
{
    let height = ctx.height();
    ctx.board = Board::with_tower(height);
    ctx.statistics.reset();
    info!(%height, "solving");

    transfer(ctx, observer, SOURCE_PEG, DESTINATION_PEG, height.get())?;

    let report = SolveReport {
        height,
        moves: ctx.moves(),
        transfers: ctx.statistics.get(Counters::Transfers),
        final_layout: ctx.board.snapshot(),
    };
    info!(%height, moves = %report.moves, transfers = %report.transfers, "solved");
    Ok(report)
}

/// Move the top `count` discs of `source` onto `destination`.
///
/// The discs are assumed to be stacked in descending order on `source`, and
/// every disc already on `destination` and on the auxiliary peg to be larger
/// than them.
///
/// # Errors
///
/// `InvalidArgument` if `count == 0`, if `count` exceeds the number of discs
/// on `source` (which also bounds the recursion depth by `MAX_HEIGHT`), or if
/// `count > 1` and `source == destination`. Nothing is moved or reported in
/// any of these cases.
pub fn transfer<O>(
    ctx: &mut SolveContext,
    observer: &mut O,
    source: Peg,
    destination: Peg,
    count: usize,
) -> Result<()>
where
    O: Observer + ?Sized,
{
    if count == 0 {
        return Err(HanoiError::InvalidArgument(
            "transfer needs at least one disc".to_string(),
        ));
    }
    let available = ctx.board.peg(source).len();
    if count > available {
        return Err(HanoiError::InvalidArgument(format!(
            "cannot transfer {} discs from peg {} holding {}",
            count, source, available
        )));
    }
    if count > 1 && source == destination {
        return Err(HanoiError::InvalidArgument(format!(
            "cannot transfer {} discs from peg {} onto itself",
            count, source
        )));
    }
    transfer_discs(ctx, observer, source, destination, count)
}

fn transfer_discs<O>(
    ctx: &mut SolveContext,
    observer: &mut O,
    source: Peg,
    destination: Peg,
    count: usize,
) -> Result<()>
where
    O: Observer + ?Sized,
{
    let call = ctx.statistics.increment_counter(Counters::Transfers);
    let transfer = Transfer {
        source,
        destination,
        count,
        call,
    };
    debug!(%source, %destination, count, call = %call, "transfer");
    observer.observe(&SolveEvent::TransferStarted { transfer });

    if count == 1 {
        let disc_move = move_single_disc(ctx, source, destination);
        observer.observe(&SolveEvent::DiscMoved {
            disc_move,
            phase: MovePhase::BaseCase,
            board: &ctx.board,
        });
    } else {
        let auxiliary = select_auxiliary_row(source, destination)?;

        // Park everything above the largest disc.
        transfer_discs(ctx, observer, source, auxiliary, count - 1)?;

        let disc_move = move_single_disc(ctx, source, destination);
        observer.observe(&SolveEvent::DiscMoved {
            disc_move,
            phase: MovePhase::LargestDisc,
            board: &ctx.board,
        });

        transfer_discs(ctx, observer, auxiliary, destination, count - 1)?;
    }

    debug_assert!(ctx.board.is_legal(), "illegal board after transfer #{}", call);
    observer.observe(&SolveEvent::TransferFinished {
        transfer,
        board: &ctx.board,
    });
    Ok(())
}
