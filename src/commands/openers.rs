//! Opening guess analysis
//!
//! Ranks every first guess and, optionally, plays all answers with each of a
//! window of them to see how the ranking translates into average guesses.

use crate::error::Result;
use crate::output::display::progress_bar;
use crate::solver::{GameState, Score, SolverConfig, solve_all};
use log::info;

/// Which part of the ranking to report
#[derive(Debug, Clone, Copy)]
pub struct OpenersConfig {
    /// Ranked openers to pass over before reporting
    pub skip: usize,
    /// Openers to report
    pub take: usize,
    /// Play every answer with each reported opener
    pub simulate: bool,
    pub show_progress: bool,
}

impl Default for OpenersConfig {
    fn default() -> Self {
        Self {
            skip: 0,
            take: 20,
            simulate: false,
            show_progress: true,
        }
    }
}

/// Batch figures for one opener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenerSimulation {
    /// Mean guesses over solved answers
    pub average: Option<f64>,
    pub max_guesses: usize,
    pub failures: usize,
}

#[derive(Debug, Clone)]
pub struct OpenerResult {
    /// 1-based position in the full ranking
    pub rank: usize,
    pub score: Score,
    pub simulation: Option<OpenerSimulation>,
}

/// Rank first guesses and report the `[skip, skip + take)` window
///
/// # Errors
///
/// Only fails if a simulated batch cannot start.
pub fn rank_openers(
    initial: &GameState,
    config: &OpenersConfig,
    solver: &SolverConfig,
) -> Result<Vec<OpenerResult>> {
    let initial = initial.clone().with_ranking(solver.ranking);
    let window: Vec<(usize, Score)> = initial
        .next_guesses()
        .into_iter()
        .enumerate()
        .skip(config.skip)
        .take(config.take)
        .collect();

    let pb = progress_bar(
        window.len() as u64,
        config.show_progress && config.simulate,
    );

    let mut results = Vec::with_capacity(window.len());
    for (index, score) in window {
        let simulation = if config.simulate {
            pb.set_message(score.guess().to_string());
            let report = solve_all(
                initial.candidates(),
                &initial,
                Some(&score),
                solver,
                |_, _| {},
            )?;
            let simulation = OpenerSimulation {
                average: report.average(),
                max_guesses: report.distribution().keys().max().copied().unwrap_or(0),
                failures: report.failures.len(),
            };
            info!(
                "opener {} averages {:.3} guesses",
                score.guess(),
                simulation.average.unwrap_or(f64::NAN)
            );
            pb.inc(1);
            Some(simulation)
        } else {
            None
        };

        results.push(OpenerResult {
            rank: index + 1,
            score,
            simulation,
        });
    }

    pb.finish_and_clear();
    Ok(results)
}
