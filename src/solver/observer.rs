// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observation of a running solve.
//!
//! The solver reports what it does through an [`Observer`]. It never prints
//! anything itself, so the caller decides whether a run is narrated, recorded
//! or ignored.
//!
//! Any `FnMut(&SolveEvent)` closure is an observer:
//!
//! ```
//! use hanoi_solver::context::SolveContext;
//! use hanoi_solver::solver::{self, SolveEvent};
//!
//! let mut ctx = SolveContext::from_height(2)?;
//! let mut moves = Vec::new();
//! solver::solve(&mut ctx, &mut |event: &SolveEvent<'_>| {
//!     if let SolveEvent::DiscMoved { disc_move, .. } = event {
//!         moves.push((disc_move.source.index(), disc_move.destination.index()));
//!     }
//! })?;
//! assert_eq!(moves, vec![(0, 1), (0, 2), (1, 2)]);
//! # Ok::<(), hanoi_solver::HanoiError>(())
//! ```

use crate::board::{Board, Peg};
use crate::mover::DiscMove;

/// One invocation of the recursive transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub source: Peg,
    pub destination: Peg,
    /// Number of discs moved by this call.
    pub count: usize,
    /// 1-based position of this call among all transfer calls of the run.
    pub call: u128,
}

/// Why the solver made a particular single-disc move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePhase {
    /// The only disc of a one-disc transfer.
    BaseCase,
    /// The bottom disc of a larger transfer, moved once the discs above it
    /// have been parked on the auxiliary peg.
    LargestDisc,
}

/// Something the solver did.
#[derive(Debug, Clone, Copy)]
pub enum SolveEvent<'a> {
    /// A transfer call was entered.
    TransferStarted { transfer: Transfer },

    /// A single disc was moved. `board` is the layout after the move.
    DiscMoved {
        disc_move: DiscMove,
        phase: MovePhase,
        board: &'a Board,
    },

    /// A transfer call returned. `board` is the layout after the call.
    TransferFinished { transfer: Transfer, board: &'a Board },
}

/// Receiver of solve events.
pub trait Observer {
    fn observe(&mut self, event: &SolveEvent<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&SolveEvent<'_>),
{
    fn observe(&mut self, event: &SolveEvent<'_>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&mut self, _event: &SolveEvent<'_>) {}
}
