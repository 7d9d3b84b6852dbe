//! Game state and guess selection
//!
//! A [`GameState`] is a snapshot: the clues seen so far, the words that could
//! still be the answer, and the words that may still be played. Advancing
//! with a new clue produces a fresh state and leaves the old one intact.

use super::{Ranking, Score};
use crate::core::{Clue, Word, WordSet};
use crate::error::{Error, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GameState {
    history: Arc<[Clue]>,
    candidates: WordSet,
    options: WordSet,
    ranking: Ranking,
}

impl GameState {
    /// Start a game
    ///
    /// `candidates` are the possible answers, `options` the words that may be
    /// guessed. The options need not include the candidates.
    ///
    /// # Errors
    /// - [`Error::EmptyWordSet`] if either set is empty
    /// - [`Error::LengthMismatch`] if the sets hold words of different lengths
    ///
    /// # Examples
    /// ```
    /// use wordle_clusters::core::WordSet;
    /// use wordle_clusters::solver::GameState;
    ///
    /// let answers = WordSet::new(["perky", "merry", "berry"]).unwrap();
    /// let state = GameState::new(answers.clone(), answers).unwrap();
    ///
    /// let best = state.choose_next_guess().unwrap();
    /// assert!(best.expected_size() < 2.0);
    /// ```
    pub fn new(candidates: WordSet, options: WordSet) -> Result<Self> {
        if candidates.is_empty() || options.is_empty() {
            return Err(Error::EmptyWordSet);
        }
        if candidates.word_len() != options.word_len() {
            return Err(Error::LengthMismatch {
                expected: candidates.word_len(),
                found: options.word_len(),
            });
        }
        Ok(Self {
            history: Arc::from(Vec::new()),
            candidates,
            options,
            ranking: Ranking::default(),
        })
    }

    #[must_use]
    pub fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }

    /// Clues played so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Clue] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &WordSet {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &WordSet {
        &self.options
    }

    #[inline]
    #[must_use]
    pub const fn ranking(&self) -> Ranking {
        self.ranking
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.candidates.word_len()
    }

    /// Score any word of the right length, whether or not it is an option
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] for a word of the wrong length.
    pub fn score(&self, guess: &Word) -> Result<Score> {
        super::score_guess(guess, &self.candidates)
    }

    /// Like [`GameState::score`], validating raw text first
    ///
    /// # Errors
    /// Returns the [`Word::new`] error for malformed text, or
    /// [`Error::LengthMismatch`] for a word of the wrong length.
    pub fn score_word(&self, text: &str) -> Result<Score> {
        self.score(&Word::new(text)?)
    }

    /// Best option under the ranking, `None` if no option is left
    ///
    /// With a single candidate left that is also an option, that candidate is
    /// returned without scoring the rest; nothing can beat a certain win.
    #[must_use]
    pub fn choose_next_guess(&self) -> Option<Score> {
        if self.candidates.len() == 1
            && let Some(last) = self.candidates.iter().next()
            && self.options.contains(last)
        {
            return Some(Score::tally(last, &self.candidates));
        }

        self.options
            .par_iter()
            .map(|guess| Score::tally(guess, &self.candidates))
            .min_by(|a, b| self.ranking.compare(a, b))
    }

    /// Every option scored, best first
    #[must_use]
    pub fn next_guesses(&self) -> Vec<Score> {
        let mut scores: Vec<Score> = self
            .options
            .par_iter()
            .map(|guess| Score::tally(guess, &self.candidates))
            .collect();
        scores.par_sort_unstable_by(|a, b| self.ranking.compare(a, b));
        scores
    }

    /// The `n` best options, best first
    #[must_use]
    pub fn top_guesses(&self, n: usize) -> Vec<Score> {
        let mut scores = self.next_guesses();
        scores.truncate(n);
        scores
    }

    /// State after `clue` has been revealed
    ///
    /// Candidates keep only words consistent with the clue. In hard mode the
    /// options are narrowed the same way by [`Clue::allows_as_next_guess`].
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if the clue has the wrong length
    /// - [`Error::NoCandidates`] if no candidate survives; `self` is unchanged
    ///   and can be advanced with a corrected clue
    pub fn advance(&self, clue: &Clue, hard_mode: bool) -> Result<Self> {
        if clue.guess().len() != self.word_len() {
            return Err(Error::LengthMismatch {
                expected: self.word_len(),
                found: clue.guess().len(),
            });
        }

        let candidates = self.candidates.filter(|word| clue.is_consistent_with(word));
        if candidates.is_empty() {
            warn!("no candidate is consistent with {clue}");
            return Err(Error::NoCandidates {
                clue: clue.to_string(),
            });
        }

        let options = if hard_mode {
            self.options.filter(|word| clue.allows_as_next_guess(word))
        } else {
            self.options.clone()
        };

        debug!(
            "{clue}: {} -> {} candidates, {} -> {} options",
            self.candidates.len(),
            candidates.len(),
            self.options.len(),
            options.len()
        );

        let history: Arc<[Clue]> = self.history.iter().chain([clue]).cloned().collect();

        Ok(Self {
            history,
            candidates,
            options,
            ranking: self.ranking,
        })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sample: Vec<&str> = self.candidates.sample(5).into_iter().map(Word::text).collect();
        write!(
            f,
            "Candidates: {}, such as {}",
            self.candidates.len(),
            sample.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::Objective;

    const ANSWERS: [&str; 12] = [
        "perky", "peppy", "merry", "berry", "ferry", "jerky", "mount", "deals", "fiber", "weepy",
        "speed", "erase",
    ];

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn state() -> GameState {
        let answers = WordSet::new(ANSWERS).unwrap();
        let options = WordSet::new(["salet", "crane", "berry"])
            .unwrap()
            .union(&answers)
            .unwrap();
        GameState::new(answers, options).unwrap()
    }

    fn clue(guess: &str, feedback: &str) -> Clue {
        Clue::new(word(guess), feedback.parse().unwrap()).unwrap()
    }

    #[test]
    fn new_validates_sets() {
        let answers = WordSet::new(["perky"]).unwrap();
        let short = WordSet::new(["pert"]).unwrap();
        let empty = answers.filter(|_| false);

        assert_eq!(
            GameState::new(answers.clone(), short).unwrap_err(),
            Error::LengthMismatch {
                expected: 5,
                found: 4
            }
        );
        assert_eq!(
            GameState::new(empty.clone(), answers.clone()).unwrap_err(),
            Error::EmptyWordSet
        );
        assert_eq!(
            GameState::new(answers, empty).unwrap_err(),
            Error::EmptyWordSet
        );
    }

    #[test]
    fn choose_next_guess_is_the_best_ranked() {
        let state = state();
        let best = state.choose_next_guess().unwrap();
        let ranked = state.next_guesses();
        assert_eq!(ranked.len(), state.options().len());
        assert_eq!(best.guess(), ranked[0].guess());
        for pair in ranked.windows(2) {
            assert!(pair[0].sum_of_squares() <= pair[1].sum_of_squares());
        }
    }

    #[test]
    fn choose_next_guess_is_deterministic() {
        let state = state();
        let first = state.choose_next_guess().unwrap();
        for _ in 0..5 {
            assert_eq!(state.choose_next_guess().unwrap().guess(), first.guess());
        }
    }

    #[test]
    fn top_guesses_is_a_prefix() {
        let state = state();
        let top: Vec<Word> = state.top_guesses(3).iter().map(|s| s.guess().clone()).collect();
        let all: Vec<Word> = state.next_guesses().iter().map(|s| s.guess().clone()).collect();
        assert_eq!(top, all[..3]);
        assert_eq!(state.top_guesses(100).len(), all.len());
    }

    #[test]
    fn score_word_validates() {
        let state = state();
        assert!(state.score_word("PERKY").is_ok());
        // Scoring does not require the word to be an option
        assert!(state.score_word("zzzzz").is_ok());
        assert!(matches!(
            state.score_word("pert"),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(matches!(
            state.score_word("p3rky"),
            Err(Error::InvalidCharacters(_))
        ));
    }

    #[test]
    fn advance_keeps_the_answer() {
        let answer = word("perky");
        let mut state = state();
        for guess in ["mount", "deals", "fiber", "weepy"] {
            let clue = Clue::from_answer(word(guess), &answer).unwrap();
            state = state.advance(&clue, true).unwrap();
            assert!(state.candidates().contains(&answer));
            assert!(state.options().contains(&answer));
        }
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.history()[1].guess().text(), "deals");
    }

    #[test]
    fn advance_narrows_and_leaves_original_untouched() {
        let state = state();
        let next = state.advance(&clue("weepy", ".*.-*"), true).unwrap();
        assert!(next.candidates().len() < state.candidates().len());
        assert!(next.candidates().iter().all(|w| w.text() == "perky"));
        assert!(state.history().is_empty());
        assert_eq!(state.candidates().len(), ANSWERS.len());
    }

    #[test]
    fn hard_mode_only_narrows_options() {
        let state = state();
        let clue = clue("fiber", "...--");
        let easy = state.advance(&clue, false).unwrap();
        let hard = state.advance(&clue, true).unwrap();

        assert_eq!(easy.options().len(), state.options().len());
        assert!(hard.options().len() <= easy.options().len());
        assert!(hard.options().iter().all(|w| easy.options().contains(w)));
        assert!(hard.options().iter().all(|w| clue.allows_as_next_guess(w)));
        assert_eq!(easy.candidates().len(), hard.candidates().len());
    }

    #[test]
    fn advance_rejects_impossible_clue() {
        let state = state();
        let impossible = Clue::new(word("zzzzz"), Feedback::all_exact(5).unwrap()).unwrap();
        let err = state.advance(&impossible, true).unwrap_err();
        assert_eq!(
            err,
            Error::NoCandidates {
                clue: "zzzzz *****".to_string()
            }
        );
        // The state is still usable
        assert!(state.advance(&clue("weepy", ".*.-*"), true).is_ok());
    }

    #[test]
    fn advance_rejects_wrong_length() {
        let state = state();
        assert!(matches!(
            state.advance(&clue("pert", "...."), true),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn last_candidate_is_chosen() {
        let state = state()
            .advance(&clue("weepy", ".*.-*"), true)
            .unwrap();
        assert_eq!(state.candidates().len(), 1);
        let best = state.choose_next_guess().unwrap();
        assert_eq!(best.guess().text(), "perky");
        assert_eq!(best.sum_of_squares(), 0);
    }

    #[test]
    fn no_options_gives_none() {
        let answers = WordSet::new(["perky", "merry"]).unwrap();
        let options = WordSet::new(["deals"]).unwrap();
        let state = GameState::new(answers, options).unwrap();
        // The m of mount is pinned, which rules deals out
        let clue = Clue::from_answer(word("mount"), &word("merry")).unwrap();
        let next = state.advance(&clue, true).unwrap();
        assert_eq!(next.candidates().len(), 1);
        assert!(next.options().is_empty());
        assert!(next.choose_next_guess().is_none());
        assert!(next.next_guesses().is_empty());
    }

    #[test]
    fn hard_mode_options_only_shrink() {
        let answer = word("perky");
        let first = state();
        let second = first
            .advance(&Clue::from_answer(word("deals"), &answer).unwrap(), true)
            .unwrap();
        let third = second
            .advance(&Clue::from_answer(word("weepy"), &answer).unwrap(), true)
            .unwrap();

        assert!(second.options().iter().all(|w| first.options().contains(w)));
        assert!(third.options().iter().all(|w| second.options().contains(w)));
        assert!(third.options().len() <= second.options().len());
        assert!(third.candidates().contains(&answer));
        assert!(third.options().contains(&answer));
    }

    #[test]
    fn ranking_is_carried_forward() {
        let ranking = Ranking::new(Objective::WorstCase);
        let state = state().with_ranking(ranking);
        let next = state.advance(&clue("mount", "....."), false).unwrap();
        assert_eq!(next.ranking(), ranking);
    }

    #[test]
    fn display() {
        let state = state();
        assert_eq!(
            state.to_string(),
            "Candidates: 12, such as berry, deals, erase, ferry, fiber"
        );
    }
}
