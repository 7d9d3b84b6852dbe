//! Playing games out against a known answer
//!
//! [`simulate`] plays one game the way the solver would, computing feedback
//! against the answer each round. [`solve_all`] does this for many answers in
//! parallel, sharing one opening guess, and collects failures instead of
//! stopping at the first one.

use super::{GameState, Score, SolverConfig};
use crate::core::{Clue, Feedback, Word, WordSet};
use crate::error::{Error, Result};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// One guess of a simulated game
#[derive(Debug, Clone)]
pub struct Round {
    pub guess: Score,
    pub feedback: Feedback,
    /// Candidates left before this guess was played
    pub candidates_before: usize,
}

/// Every round of a solved game; the last guess is the answer
#[derive(Debug, Clone)]
pub struct Trace {
    pub answer: Word,
    pub rounds: Vec<Round>,
}

impl Trace {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }

    /// Guesses in the order played
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.rounds.iter().map(|round| round.guess.guess())
    }
}

/// Solve `answer` starting from `initial`, letting the solver pick every guess
///
/// # Errors
/// See [`simulate_with_opening`]. Also returns [`Error::NoOptions`] if the
/// initial state offers no guess.
pub fn simulate(answer: &Word, initial: &GameState, config: &SolverConfig) -> Result<Trace> {
    let initial = initial.clone().with_ranking(config.ranking);
    let opening = initial.choose_next_guess().ok_or(Error::NoOptions)?;
    simulate_with_opening(answer, &initial, &opening, config)
}

/// Solve `answer` with a fixed first guess
///
/// The opening is usually the most expensive guess to compute and is the same
/// for every answer, so batch runs compute it once and pass it in here.
///
/// # Errors
/// - [`Error::LengthMismatch`] if `answer` or `opening` has the wrong length
/// - [`Error::UnknownWord`] if `answer` is not a candidate of `initial`
/// - [`Error::NoOptions`] if hard mode leaves nothing to play
/// - [`Error::BudgetExceeded`] if `config.max_rounds` guesses do not find it
///
/// # Examples
/// ```
/// use wordle_clusters::core::{Word, WordSet};
/// use wordle_clusters::solver::{GameState, SolverConfig, simulate_with_opening};
///
/// let answers = WordSet::new(["perky", "merry", "berry", "ferry", "jerky"]).unwrap();
/// let initial = GameState::new(answers.clone(), answers).unwrap();
/// let opening = initial.score_word("merry").unwrap();
///
/// let answer = Word::new("jerky").unwrap();
/// let trace = simulate_with_opening(&answer, &initial, &opening, &SolverConfig::default()).unwrap();
/// assert_eq!(trace.guesses().last(), Some(&answer));
/// ```
pub fn simulate_with_opening(
    answer: &Word,
    initial: &GameState,
    opening: &Score,
    config: &SolverConfig,
) -> Result<Trace> {
    if answer.len() != initial.word_len() {
        return Err(Error::LengthMismatch {
            expected: initial.word_len(),
            found: answer.len(),
        });
    }
    if !initial.candidates().contains(answer) {
        return Err(Error::UnknownWord(answer.to_string()));
    }

    let mut state = initial.clone().with_ranking(config.ranking);
    let mut guess = opening.clone();
    let mut rounds = Vec::new();

    for round in 1..=config.max_rounds {
        let feedback = Feedback::compute(answer, guess.guess())?;
        let solved = guess.solves(answer);
        let clue = Clue::new(guess.guess().clone(), feedback)?;

        rounds.push(Round {
            guess,
            feedback,
            candidates_before: state.candidates().len(),
        });

        if solved {
            debug!("{answer} solved in {round}");
            return Ok(Trace {
                answer: answer.clone(),
                rounds,
            });
        }
        if round == config.max_rounds {
            break;
        }

        state = state.advance(&clue, config.hard_mode)?;
        guess = state.choose_next_guess().ok_or(Error::NoOptions)?;
    }

    Err(Error::BudgetExceeded {
        answer: answer.to_string(),
        rounds: config.max_rounds,
    })
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Solved games, in answer order
    pub traces: Vec<Trace>,
    /// Answers that could not be solved, in answer order
    pub failures: Vec<(Word, Error)>,
}

impl BatchReport {
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.traces.len() + self.failures.len()
    }

    /// Number of solved games per guess count
    #[must_use]
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for trace in &self.traces {
            *distribution.entry(trace.guess_count()).or_insert(0) += 1;
        }
        distribution
    }

    /// Mean guesses over solved games, `None` if nothing was solved
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.traces.is_empty() {
            return None;
        }
        let total: usize = self.traces.iter().map(Trace::guess_count).sum();
        Some(total as f64 / self.traces.len() as f64)
    }

    /// The `n` solved games that took the most guesses, longest first
    #[must_use]
    pub fn hardest(&self, n: usize) -> Vec<&Trace> {
        let mut traces: Vec<&Trace> = self.traces.iter().collect();
        traces.sort_by(|a, b| {
            b.guess_count()
                .cmp(&a.guess_count())
                .then_with(|| a.answer.cmp(&b.answer))
        });
        traces.truncate(n);
        traces
    }
}

/// Simulate every answer in parallel
///
/// `opening` is used as the first guess of every game; when `None` the solver's
/// own choice is computed once up front. `on_progress` runs after each game,
/// from whichever worker finished it.
///
/// # Errors
/// Only fails if no opening can be chosen ([`Error::NoOptions`]). Per-answer
/// errors are collected in [`BatchReport::failures`].
pub fn solve_all<F>(
    answers: &WordSet,
    initial: &GameState,
    opening: Option<&Score>,
    config: &SolverConfig,
    on_progress: F,
) -> Result<BatchReport>
where
    F: Fn(&Word, &Result<Trace>) + Sync,
{
    let initial = initial.clone().with_ranking(config.ranking);
    let opening = match opening {
        Some(score) => score.clone(),
        None => initial.choose_next_guess().ok_or(Error::NoOptions)?,
    };
    info!(
        "simulating {} answers, opening with {}",
        answers.len(),
        opening.guess()
    );

    let outcomes: Vec<(Word, Result<Trace>)> = answers
        .par_iter()
        .map(|answer| {
            let outcome = simulate_with_opening(answer, &initial, &opening, config);
            on_progress(answer, &outcome);
            (answer.clone(), outcome)
        })
        .collect();

    let mut report = BatchReport::default();
    for (answer, outcome) in outcomes {
        match outcome {
            Ok(trace) => report.traces.push(trace),
            Err(err) => report.failures.push((answer, err)),
        }
    }

    info!(
        "solved {}/{} answers",
        report.traces.len(),
        report.attempted()
    );
    Ok(report)
}
