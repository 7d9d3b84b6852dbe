//! Command implementations

pub mod analyze;
pub mod average;
pub mod openers;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, WorstCase, analyze_guess};
pub use average::{AverageConfig, AverageResult, run_average};
pub use openers::{OpenerResult, OpenerSimulation, OpenersConfig, rank_openers};
pub use play::{PlayOutcome, run_play};
pub use solve::{SolveResult, SolveStep, solve_word};

use crate::core::Word;
use crate::error::{Error, Result};
use crate::solver::{GameState, Score};

/// Opening played when none is requested and it is a legal guess
pub const DEFAULT_OPENING: &str = "salet";

/// Score the opening guess for a session
///
/// A requested word must be one of the options. Without a request,
/// [`DEFAULT_OPENING`] is used if it is an option; otherwise `None`, leaving
/// the choice to the solver.
///
/// # Errors
///
/// Returns an error if the requested word is malformed, has the wrong length
/// or is not an option.
pub fn resolve_opening(state: &GameState, requested: Option<&str>) -> Result<Option<Score>> {
    match requested {
        Some(text) => {
            let word = Word::new(text)?;
            if word.len() == state.word_len() && !state.options().contains(&word) {
                return Err(Error::UnknownWord(word.to_string()));
            }
            state.score(&word).map(Some)
        }
        None => state
            .options()
            .get(DEFAULT_OPENING)
            .map(|word| state.score(word))
            .transpose(),
    }
}
