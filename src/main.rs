// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `hanoi HEIGHT`: solve and narrate a Towers of Hanoi puzzle.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hanoi_solver::render::{write_labelled_board, Narrator};
use hanoi_solver::{solver, Narration, NullObserver, PuzzleConfig, SolveContext};

#[derive(Debug, Parser)]
#[command(name = "hanoi", about = "Solve the Towers of Hanoi recursively", version)]
struct Cli {
    /// Number of discs in the initial tower (2..=100).
    #[arg(allow_negative_numbers = true)]
    height: i64,

    /// How much of the solution to print.
    #[arg(long, value_enum, default_value_t = Narration::Full)]
    narration: Narration,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = PuzzleConfig::new(cli.height, cli.narration)?;
    let mut ctx = SolveContext::new(config.height);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match config.narration {
        Narration::Quiet => solver::solve(&mut ctx, &mut NullObserver)?,
        Narration::Summary => {
            write_labelled_board(&mut out, "Initial state:", &ctx.board)?;
            solver::solve(&mut ctx, &mut NullObserver)?
        }
        Narration::Full => {
            write_labelled_board(&mut out, "Initial state:", &ctx.board)?;
            let mut narrator = Narrator::new(&mut out);
            let report = solver::solve(&mut ctx, &mut narrator)?;
            narrator.finish().context("writing move narration")?;
            report
        }
    };

    match config.narration {
        Narration::Quiet => writeln!(out, "{} moves", report.moves)?,
        Narration::Summary | Narration::Full => write_labelled_board(
            &mut out,
            &format!("Final state in {} moves:", report.moves),
            &ctx.board,
        )?,
    }
    out.flush().context("flushing output")?;
    Ok(())
}
