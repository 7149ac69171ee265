// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive solver for the Towers of Hanoi on three pegs.
//!
//! # Architecture
//!
//! - [`board`]: the three fixed-capacity peg stacks of one puzzle
//! - [`mover`]: single-disc moves and auxiliary peg selection
//! - [`solver`]: the recursive transfer, plus the [`Observer`] seam through
//!   which every call and move is reported
//! - [`context`]: the board and counters owned by one solve run
//! - [`config`]: validated height and narration level
//! - [`render`]: text rendering of boards and the narrating observer
//!
//! There is no global state. Each [`SolveContext`] owns its board and its
//! move counter, so independent puzzles can run side by side.
//!
//! # Example
//!
//! ```
//! use hanoi_solver::{solver, NullObserver, Peg, SolveContext};
//!
//! let mut ctx = SolveContext::from_height(4)?;
//! let report = solver::solve(&mut ctx, &mut NullObserver)?;
//! assert_eq!(report.moves, 15);
//! assert_eq!(report.final_layout.peg(Peg::Right), &[4, 3, 2, 1]);
//! # Ok::<(), hanoi_solver::HanoiError>(())
//! ```

pub mod board;
pub mod config;
pub mod context;
pub mod error;
pub mod mover;
pub mod render;
pub mod solver;

// Re-export commonly used types
pub use board::{Board, Disc, Peg, PegStack, Snapshot};
pub use config::{Height, Narration, PuzzleConfig};
pub use context::SolveContext;
pub use error::HanoiError;
pub use solver::{NullObserver, Observer, SolveEvent, SolveReport};
