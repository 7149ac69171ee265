// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve context combining the board and the counters.
//!
//! One `SolveContext` holds all mutable state of one puzzle instance. It is
//! passed by `&mut` through the mover and the solver, so several puzzles can
//! be solved side by side (for example in parallel tests) without
//! interfering.
//!
//! ```
//! use hanoi_solver::config::Height;
//! use hanoi_solver::context::SolveContext;
//! use hanoi_solver::solver::{self, NullObserver};
//!
//! let mut ctx = SolveContext::new(Height::new(3)?);
//! let report = solver::solve(&mut ctx, &mut NullObserver)?;
//! assert_eq!(report.moves, 7);
//! # Ok::<(), hanoi_solver::HanoiError>(())
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::board::Board;
use crate::config::Height;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SolveContext {
    /// Current peg layout.
    pub board: Board,

    /// Move counter and diagnostic counters.
    pub statistics: Statistics,

    height: Height,
}

impl SolveContext {
    /// Create a context with the full tower on the source peg.
    pub fn new(height: Height) -> Self {
        Self {
            board: Board::with_tower(height),
            statistics: Statistics::new(),
            height,
        }
    }

    /// Validate `height` and create a context for it.
    pub fn from_height(height: i64) -> Result<Self> {
        Ok(Self::new(Height::new(height)?))
    }

    /// Height of the tower this context was built for.
    pub fn height(&self) -> Height {
        self.height
    }

    /// Number of single-disc moves made so far.
    pub fn moves(&self) -> u128 {
        self.statistics.get(Counters::DiscMoves)
    }
}
