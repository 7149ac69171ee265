// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text output: board rendering and move narration.
//!
//! Boards are drawn top level first, one column per peg:
//!
//! ```text
//!       |      |      1
//!       |      |      2
//!     ===    ===    ===
//! ```
//!
//! The number of levels drawn is the size of the largest disc on the board
//! (the tower height), or the fullest peg if that is taller, so no disc is
//! ever left out. Empty slots are drawn as a bare peg, `|`.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::board::Board;
use crate::solver::{MovePhase, Observer, SolveEvent};

/// Draw `board` as text. Every line, including the last, ends in `\n`.
pub fn render_board(board: &Board) -> String {
    let fullest = board.pegs().map(|peg| peg.len()).max().unwrap_or(0);
    let levels = fullest.max(board.tallest_disc() as usize);
    let mut text = String::new();
    for level in (0..levels).rev() {
        for peg in board.pegs() {
            match peg.discs().get(level) {
                Some(disc) => {
                    let _ = write!(text, "    {:3}", disc);
                }
                None => text.push_str("      |"),
            }
        }
        text.push('\n');
    }
    for _ in board.pegs() {
        text.push_str("    ===");
    }
    text.push('\n');
    text
}

/// Write `label`, then the board, then a blank line.
pub fn write_labelled_board<W: Write + ?Sized>(out: &mut W, label: &str, board: &Board) -> io::Result<()> {
    write!(out, "{}\n{}\n", label, render_board(board))
}

/// Observer that prints a trace of every transfer call and every move.
///
/// Observers cannot fail, so the first write error is kept and returned by
/// [`Narrator::finish`]; later events are dropped.
#[derive(Debug)]
pub struct Narrator<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn narrate(&mut self, event: &SolveEvent<'_>) -> io::Result<()> {
        match event {
            SolveEvent::TransferStarted { transfer } => writeln!(
                self.out,
                "move({}, {}, {}) call #{}",
                transfer.source, transfer.destination, transfer.count, transfer.call
            ),
            SolveEvent::DiscMoved {
                disc_move,
                phase,
                board,
            } => {
                writeln!(self.out, "moveDisc() #{}", disc_move.number)?;
                let label = match phase {
                    MovePhase::BaseCase => "Trivial case",
                    MovePhase::LargestDisc => "Bottom disc moved (trivial case)",
                };
                write_labelled_board(&mut self.out, label, board)
            }
            SolveEvent::TransferFinished { .. } => Ok(()),
        }
    }
}

impl<W: Write> Observer for Narrator<W> {
    fn observe(&mut self, event: &SolveEvent<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.narrate(event) {
            self.error = Some(err);
        }
    }
}
