//! Word solving command
//!
//! Solves a specific target word and returns the solution path, along with
//! the state the solver was in before each guess.

use crate::core::{Clue, Word};
use crate::error::Result;
use crate::solver::{GameState, Round, Score, SolverConfig, simulate, simulate_with_opening};

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct SolveStep {
    /// State the guess was chosen in
    pub state: GameState,
    pub round: Round,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: Word,
    pub steps: Vec<SolveStep>,
}

/// Solve `answer` from `initial`, starting with `opening` if given
///
/// # Errors
///
/// Returns an error if:
/// - The answer is malformed or not one of the candidates
/// - No guess is available in some round
/// - The round budget runs out before the answer is found
pub fn solve_word(
    answer: &str,
    initial: &GameState,
    opening: Option<&Score>,
    config: &SolverConfig,
) -> Result<SolveResult> {
    let answer = Word::new(answer)?;
    let initial = initial.clone().with_ranking(config.ranking);

    let trace = match opening {
        Some(opening) => simulate_with_opening(&answer, &initial, opening, config)?,
        None => simulate(&answer, &initial, config)?,
    };

    // Replay the clues to recover the intermediate states
    let mut state = initial;
    let mut steps = Vec::with_capacity(trace.rounds.len());
    for round in trace.rounds {
        let before = state.clone();
        if !round.feedback.is_solved() {
            let clue = Clue::new(round.guess.guess().clone(), round.feedback)?;
            state = state.advance(&clue, config.hard_mode)?;
        }
        steps.push(SolveStep {
            state: before,
            round,
        });
    }

    Ok(SolveResult { answer, steps })
}
