// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for full solves.
//!
//! These tests drive the public API the way the binary does:
//! - validate a height
//! - build a context
//! - solve with an observer
//! - inspect the report and the recorded boards

mod common;

use common::{is_descending, RecordingObserver};
use hanoi_solver::board::{MAX_HEIGHT, MIN_HEIGHT};
use hanoi_solver::context::Counters;
use hanoi_solver::mover::select_auxiliary_row;
use hanoi_solver::solver::{self, expected_moves};
use hanoi_solver::{HanoiError, NullObserver, Peg, Snapshot, SolveContext};

#[test]
fn test_height_2_scenario() {
    let mut ctx = SolveContext::from_height(2).unwrap();
    let report = solver::solve(&mut ctx, &mut NullObserver).unwrap();
    assert_eq!(report.moves, 3);
    assert_eq!(
        report.final_layout,
        Snapshot::from_layout([vec![], vec![], vec![2, 1]])
    );
}

#[test]
fn test_height_3_scenario() {
    let mut ctx = SolveContext::from_height(3).unwrap();
    let report = solver::solve(&mut ctx, &mut NullObserver).unwrap();
    assert_eq!(report.moves, 7);
    assert_eq!(report.final_layout.peg(Peg::Right), &[3, 2, 1]);
    assert!(report.final_layout.peg(Peg::Left).is_empty());
    assert!(report.final_layout.peg(Peg::Middle).is_empty());
}

#[test]
fn test_startup_validation() {
    assert!(matches!(
        SolveContext::from_height(1),
        Err(HanoiError::InvalidHeight { height: 1, min: 2, max: 100 })
    ));
    assert!(matches!(
        SolveContext::from_height(101),
        Err(HanoiError::InvalidHeight { height: 101, .. })
    ));
    assert!(SolveContext::from_height(MIN_HEIGHT as i64).is_ok());
    assert!(SolveContext::from_height(MAX_HEIGHT as i64).is_ok());
}

#[test]
fn test_auxiliary_row_scenarios() {
    assert_eq!(select_auxiliary_row(Peg::Left, Peg::Right), Ok(Peg::Middle));
    assert_eq!(select_auxiliary_row(Peg::Middle, Peg::Left), Ok(Peg::Right));
    assert!(select_auxiliary_row(Peg::Right, Peg::Right).is_err());
}

#[test]
fn test_all_small_heights_solve() {
    for h in 2..=14 {
        let mut ctx = SolveContext::from_height(h).unwrap();
        let report = solver::solve(&mut ctx, &mut NullObserver).unwrap();
        assert_eq!(report.moves, expected_moves(ctx.height()));

        let expected: Vec<u8> = (1..=h as u8).rev().collect();
        assert_eq!(report.final_layout.peg(Peg::Right), expected.as_slice());
        assert_eq!(report.final_layout.disc_count(), h as usize);
        assert_eq!(ctx.statistics.get(Counters::SelfMoves), 0);
        assert_eq!(ctx.statistics.get(Counters::EmptySourceMoves), 0);
    }
}

#[test]
fn test_board_legal_at_every_observation() {
    let mut ctx = SolveContext::from_height(6).unwrap();
    assert!(is_descending(&ctx.board.snapshot()));

    let mut recorder = RecordingObserver::new();
    let report = solver::solve(&mut ctx, &mut recorder).unwrap();

    assert!(recorder.legal_throughout);
    assert!(recorder.boards.iter().all(is_descending));
    assert!(recorder.boards.iter().all(|board| board.disc_count() == 6));
    assert_eq!(recorder.moves.len() as u128, report.moves);
    assert_eq!(recorder.boards.last(), Some(&report.final_layout));
}

#[test]
fn test_every_move_relocates_a_smaller_disc() {
    let mut ctx = SolveContext::from_height(5).unwrap();
    let mut recorder = RecordingObserver::new();
    solver::solve(&mut ctx, &mut recorder).unwrap();

    for (index, mv) in recorder.moves.iter().enumerate() {
        assert_eq!(mv.number, index as u128 + 1);
        assert_ne!(mv.source, mv.destination);
        assert!(mv.disc.is_some());
    }
    // The largest disc moves exactly once, halfway through.
    let largest: Vec<_> = recorder
        .moves
        .iter()
        .filter(|mv| mv.disc == Some(5))
        .collect();
    assert_eq!(largest.len(), 1);
    assert_eq!(largest[0].number, 16);
}

#[test]
fn test_snapshot_idempotent_after_solve() {
    let mut ctx = SolveContext::from_height(4).unwrap();
    solver::solve(&mut ctx, &mut NullObserver).unwrap();
    assert_eq!(ctx.board.snapshot(), ctx.board.snapshot());
}

#[test]
fn test_independent_contexts_do_not_interfere() {
    let handles: Vec<_> = (2..=9)
        .map(|h| {
            std::thread::spawn(move || {
                let mut ctx = SolveContext::from_height(h).unwrap();
                solver::solve(&mut ctx, &mut NullObserver).unwrap().moves
            })
        })
        .collect();
    for (h, handle) in (2..=9).zip(handles) {
        assert_eq!(handle.join().unwrap(), (1u128 << h) - 1);
    }
}
