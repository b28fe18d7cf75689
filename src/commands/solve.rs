//! Autoplay command
//!
//! Runs the solver over the known answers and reports how it did.

use crate::output::{print_loss_metrics, print_solver_event, print_stats};
use crate::solver::{AggregateStats, AutoSolver, SolverConfig, SolverEvent};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Options for the solve command
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Print every guess and outcome instead of a progress bar
    pub debug: bool,
    pub config: SolverConfig,
}

/// Play the configured games and print the summary
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or the loss
/// metrics cannot be serialized.
pub fn run_solve(bank: &WordBank, options: SolveOptions) -> Result<AggregateStats> {
    let SolveOptions { debug, config } = options;

    let stats = if debug {
        let mut solver = AutoSolver::from_bank(bank, config).with_trace(print_solver_event);
        solver.run(bank.answers());
        let stats = solver.into_stats();
        print_loss_metrics(&stats).context("failed to serialize loss metrics")?;
        stats
    } else {
        let planned = AutoSolver::from_bank(bank, config.clone()).planned_games(bank.answers());
        let pb = progress_bar(planned)?;
        let mut solver = AutoSolver::from_bank(bank, config).with_trace(|event| {
            if let SolverEvent::GameOver { solution, .. } = event {
                pb.set_message(solution.to_string());
                pb.inc(1);
            }
        });
        solver.run(bank.answers());
        let stats = solver.into_stats();
        pb.finish_and_clear();
        stats
    };

    print_stats(&stats);
    Ok(stats)
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress bar template")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}
