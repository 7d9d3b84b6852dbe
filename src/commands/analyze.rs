//! Guess analysis command
//!
//! Scores one guess at a given state and shows where its worst outcome would
//! leave the game.

use crate::core::{Clue, Feedback};
use crate::error::Result;
use crate::solver::{GameState, Score};

/// State reached after the largest cluster's feedback
#[derive(Debug, Clone)]
pub struct WorstCase {
    pub feedback: Feedback,
    pub state: GameState,
}

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub score: Score,
    /// `None` when the guess is the only candidate left
    pub worst_case: Option<WorstCase>,
}

/// Analyze `guess` at `state`
///
/// The guess does not have to be an option; any word of the right length can
/// be assessed.
///
/// # Errors
///
/// Returns an error if the word is malformed or has the wrong length.
pub fn analyze_guess(state: &GameState, guess: &str, hard_mode: bool) -> Result<AnalysisResult> {
    let score = state.score_word(guess)?;

    let worst_case = score
        .worst_case_feedback()
        .map(|feedback| -> Result<WorstCase> {
            let clue = Clue::new(score.guess().clone(), feedback)?;
            Ok(WorstCase {
                feedback,
                state: state.advance(&clue, hard_mode)?,
            })
        })
        .transpose()?;

    Ok(AnalysisResult { score, worst_case })
}
