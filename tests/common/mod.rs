// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use hanoi_solver::mover::DiscMove;
use hanoi_solver::{Observer, Snapshot, SolveEvent};

/// An observer that keeps every move and every board it is shown.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub moves: Vec<DiscMove>,
    /// Board after each move and after each finished transfer, in order.
    pub boards: Vec<Snapshot>,
    pub legal_throughout: bool,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            legal_throughout: true,
            ..Self::default()
        }
    }
}

impl Observer for RecordingObserver {
    fn observe(&mut self, event: &SolveEvent<'_>) {
        match event {
            SolveEvent::TransferStarted { .. } => {}
            SolveEvent::DiscMoved {
                disc_move, board, ..
            } => {
                self.moves.push(*disc_move);
                self.legal_throughout &= board.is_legal();
                self.boards.push(board.snapshot());
            }
            SolveEvent::TransferFinished { board, .. } => {
                self.legal_throughout &= board.is_legal();
                self.boards.push(board.snapshot());
            }
        }
    }
}

/// True if every peg in the snapshot is strictly descending.
pub fn is_descending(snapshot: &Snapshot) -> bool {
    snapshot
        .clone()
        .into_layout()
        .iter()
        .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]))
}
