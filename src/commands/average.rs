//! Average guess count over many answers
//!
//! Plays every answer (or a seeded random sample of them) with one fixed
//! opening and reports how many guesses each game took.

use crate::core::Word;
use crate::error::{Error, Result};
use crate::output::display::progress_bar;
use crate::solver::{BatchReport, GameState, Score, SolverConfig, solve_all};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Configuration for an average run
#[derive(Debug, Clone, Copy)]
pub struct AverageConfig {
    /// Play only this many randomly chosen answers
    pub sample: Option<usize>,
    /// Seed for the random sample
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for AverageConfig {
    fn default() -> Self {
        Self {
            sample: None,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of an average run
#[derive(Debug, Clone)]
pub struct AverageResult {
    pub opening: Word,
    pub report: BatchReport,
    pub duration: Duration,
}

/// Play every selected answer and collect the results
///
/// When `opening` is `None` the solver's own first choice is computed once and
/// shared by every game.
///
/// # Errors
///
/// Returns [`Error::NoOptions`] if no opening can be chosen. Failures of
/// individual answers are reported in [`BatchReport::failures`] instead.
pub fn run_average(
    initial: &GameState,
    opening: Option<&Score>,
    config: &AverageConfig,
    solver: &SolverConfig,
) -> Result<AverageResult> {
    let start = Instant::now();
    let initial = initial.clone().with_ranking(solver.ranking);

    let answers = match config.sample {
        Some(n) => initial
            .candidates()
            .choose_random(n, &mut StdRng::seed_from_u64(config.seed)),
        None => initial.candidates().clone(),
    };

    let opening = match opening {
        Some(score) => score.clone(),
        None => initial.choose_next_guess().ok_or(Error::NoOptions)?,
    };

    let pb = progress_bar(answers.len() as u64, config.show_progress);
    let solved_count = AtomicUsize::new(0);
    let total_guesses = AtomicUsize::new(0);

    let report = solve_all(&answers, &initial, Some(&opening), solver, |_, outcome| {
        if let Ok(trace) = outcome {
            let count = solved_count.fetch_add(1, Ordering::Relaxed) + 1;
            let guesses = trace.guess_count();
            let total = total_guesses.fetch_add(guesses, Ordering::Relaxed) + guesses;
            pb.set_message(format!("Avg: {:.3}", total as f64 / count as f64));
        }
        pb.inc(1);
    })?;

    pb.finish_with_message("Complete!");

    Ok(AverageResult {
        opening: opening.guess().clone(),
        report,
        duration: start.elapsed(),
    })
}
