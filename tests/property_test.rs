// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over randomly chosen heights and peg pairs.

mod common;

use common::RecordingObserver;
use hanoi_solver::mover::select_auxiliary_row;
use hanoi_solver::solver::{self, transfer};
use hanoi_solver::{Height, NullObserver, Peg, SolveContext};
use proptest::prelude::*;

fn peg() -> impl Strategy<Value = Peg> {
    (0usize..3).prop_map(|index| Peg::from_index(index).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn solve_takes_two_to_the_height_minus_one_moves(h in 2i64..=16) {
        let mut ctx = SolveContext::from_height(h).unwrap();
        let report = solver::solve(&mut ctx, &mut NullObserver).unwrap();
        prop_assert_eq!(report.moves, (1u128 << h) - 1);
        prop_assert_eq!(report.final_layout.peg(Peg::Right).len(), h as usize);
        prop_assert!(report.final_layout.peg(Peg::Left).is_empty());
        prop_assert!(report.final_layout.peg(Peg::Middle).is_empty());
    }

    #[test]
    fn board_stays_legal(h in 2i64..=10) {
        let mut ctx = SolveContext::from_height(h).unwrap();
        let mut recorder = RecordingObserver::new();
        solver::solve(&mut ctx, &mut recorder).unwrap();
        prop_assert!(recorder.legal_throughout);
    }

    #[test]
    fn auxiliary_row_is_the_third_peg(a in peg(), b in peg()) {
        let result = select_auxiliary_row(a, b);
        if a == b {
            prop_assert!(result.is_err());
        } else {
            let aux = result.unwrap();
            prop_assert!(aux != a && aux != b);
        }
    }

    #[test]
    fn partial_transfer_moves_top_discs(h in 2i64..=10, count in 1usize..=10, dest in 1usize..3) {
        prop_assume!(count as i64 <= h);
        let destination = Peg::from_index(dest).unwrap();
        let mut ctx = SolveContext::from_height(h).unwrap();
        transfer(&mut ctx, &mut NullObserver, Peg::Left, destination, count).unwrap();

        prop_assert_eq!(ctx.moves(), (1u128 << count) - 1);
        prop_assert_eq!(ctx.board.peg(Peg::Left).len(), h as usize - count);
        let moved: Vec<u8> = (1..=count as u8).rev().collect();
        prop_assert_eq!(ctx.board.peg(destination).discs(), moved.as_slice());
        prop_assert!(ctx.board.is_legal());
    }

    #[test]
    fn heights_outside_range_are_rejected(h in prop_oneof![i64::MIN..2i64, 101i64..i64::MAX]) {
        prop_assert!(Height::new(h).is_err());
    }
}
