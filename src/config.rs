// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! The height is validated once, up front, into a [`Height`]. Everything
//! downstream takes a `Height`, so an out-of-range tower can never reach the
//! solver through the normal entry points.

use std::fmt;

use clap::ValueEnum;

use crate::board::{MAX_HEIGHT, MIN_HEIGHT};
use crate::error::{HanoiError, Result};

/// Validated tower height in `[MIN_HEIGHT, MAX_HEIGHT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(usize);

impl Height {
    /// Validate a requested height.
    ///
    /// # Errors
    ///
    /// `InvalidHeight` if `value` is outside `[MIN_HEIGHT, MAX_HEIGHT]`.
    /// Values are never clamped.
    pub fn new(value: i64) -> Result<Self> {
        match usize::try_from(value) {
            Ok(height) if (MIN_HEIGHT..=MAX_HEIGHT).contains(&height) => Ok(Self(height)),
            _ => Err(HanoiError::InvalidHeight {
                height: value,
                min: MIN_HEIGHT,
                max: MAX_HEIGHT,
            }),
        }
    }

    /// Get the underlying value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How much of a run is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Narration {
    /// Only the total number of moves.
    Quiet,
    /// Initial and final boards.
    Summary,
    /// Every recursive call and every move, with intermediate boards.
    #[default]
    Full,
}

/// Everything needed to run one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub height: Height,
    pub narration: Narration,
}

impl PuzzleConfig {
    /// Validating constructor.
    pub fn new(height: i64, narration: Narration) -> Result<Self> {
        Ok(Self {
            height: Height::new(height)?,
            narration,
        })
    }
}
