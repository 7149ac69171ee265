// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the solver.
//!
//! `InvalidHeight` and `InvalidArgument` are caller errors. The stack errors
//! mean the puzzle state is already corrupt; the mover panics on them rather
//! than handing them back.

use crate::board::{Disc, Peg};
use thiserror::Error;

/// Errors produced while configuring or running a solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// Startup height outside `[min, max]`.
    #[error("height {height} out of range, must be in <{min}; {max}>")]
    InvalidHeight { height: i64, min: usize, max: usize },

    /// Removal from an empty peg.
    #[error("stack underflow: peg {peg} is empty")]
    StackUnderflow { peg: Peg },

    /// Addition to a full peg.
    #[error("stack overflow: peg {peg} already holds {capacity} discs (disc {disc} rejected)")]
    StackOverflow {
        peg: Peg,
        capacity: usize,
        disc: Disc,
    },

    /// Argument rejected by a solver or mover entry point.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, HanoiError>;
