//! A played guess together with the feedback it received

use super::word::{ALPHABET_LEN, letter_index};
use super::{Feedback, Symbol, Word};
use crate::error::{Error, Result};
use std::fmt;

/// Guess plus feedback; both always have the same length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    guess: Word,
    feedback: Feedback,
}

impl Clue {
    /// Pair a guess with the feedback it received
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the feedback length differs from the
    /// guess length.
    pub fn new(guess: Word, feedback: Feedback) -> Result<Self> {
        if guess.len() != feedback.len() {
            return Err(Error::LengthMismatch {
                expected: guess.len(),
                found: feedback.len(),
            });
        }
        Ok(Self { guess, feedback })
    }

    /// The clue `guess` earns when `answer` is the secret
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the words differ in length.
    pub fn from_answer(guess: Word, answer: &Word) -> Result<Self> {
        let feedback = Feedback::compute(answer, &guess)?;
        Ok(Self { guess, feedback })
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Check whether `candidate` could still be the answer
    ///
    /// True exactly when guessing this clue's word against `candidate` would
    /// have produced this clue's feedback.
    ///
    /// # Examples
    /// ```
    /// use wordle_clusters::core::{Clue, Feedback, Word};
    ///
    /// let clue = Clue::new(Word::new("weepy").unwrap(), ".*.-*".parse().unwrap()).unwrap();
    /// assert!(clue.is_consistent_with(&Word::new("perky").unwrap()));
    /// assert!(!clue.is_consistent_with(&Word::new("peppy").unwrap()));
    /// ```
    #[must_use]
    pub fn is_consistent_with(&self, candidate: &Word) -> bool {
        candidate.len() == self.guess.len()
            && Feedback::between(candidate.as_bytes(), self.guess.as_bytes()) == self.feedback
    }

    /// Check whether `word` may be played next in hard mode
    ///
    /// Every Exact letter must stay in place. The letters of `word` at the
    /// remaining positions form a bag, and each Present letter of the guess
    /// must take its own copy out of that bag.
    #[must_use]
    pub fn allows_as_next_guess(&self, word: &Word) -> bool {
        if word.len() != self.guess.len() {
            return false;
        }

        let mut bag = [0u8; ALPHABET_LEN];
        for (i, (&w, &g)) in word.as_bytes().iter().zip(self.guess.as_bytes()).enumerate() {
            if self.feedback.symbol(i) == Symbol::Exact {
                if w != g {
                    return false;
                }
            } else {
                bag[letter_index(w)] += 1;
            }
        }

        for (i, &g) in self.guess.as_bytes().iter().enumerate() {
            if self.feedback.symbol(i) == Symbol::Present {
                let left = &mut bag[letter_index(g)];
                if *left == 0 {
                    return false;
                }
                *left -= 1;
            }
        }

        true
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn clue(guess: &str, feedback: &str) -> Clue {
        Clue::new(word(guess), feedback.parse().unwrap()).unwrap()
    }

    #[rstest]
    #[case("mount", ".....")]
    #[case("deals", ".*...")]
    #[case("fiber", "...--")]
    #[case("weepy", ".*.-*")]
    #[case("perky", "*****")]
    fn clues_consistent_with_perky(#[case] guess: &str, #[case] feedback: &str) {
        assert!(clue(guess, feedback).is_consistent_with(&word("perky")));
    }

    #[rstest]
    #[case("deals", ".....")]
    #[case("fiber", "...-.")]
    #[case("weepy", ".*..*")]
    #[case("perky", "****.")]
    fn clues_inconsistent_with_perky(#[case] guess: &str, #[case] feedback: &str) {
        assert!(!clue(guess, feedback).is_consistent_with(&word("perky")));
    }

    #[test]
    fn new_rejects_mismatched_feedback() {
        assert_eq!(
            Clue::new(word("perky"), "....".parse().unwrap()),
            Err(Error::LengthMismatch {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn from_answer_is_consistent_with_answer() {
        let answer = word("erase");
        for guess in ["speed", "crane", "eerie", "erase", "asses"] {
            let clue = Clue::from_answer(word(guess), &answer).unwrap();
            assert!(clue.is_consistent_with(&answer), "{clue}");
        }
    }

    #[test]
    fn wrong_length_candidates_never_match() {
        let clue = clue("deals", ".*...");
        assert!(!clue.is_consistent_with(&word("pert")));
        assert!(!clue.allows_as_next_guess(&word("pert")));
    }

    #[rstest]
    // Exact letters must stay put
    #[case("weepy", ".*.-*", "perky", true)]
    #[case("weepy", ".*.-*", "party", false)]
    // Present letters must be reused somewhere outside the Exact slots
    #[case("fiber", "...--", "query", true)]
    #[case("fiber", "...--", "ready", true)]
    #[case("fiber", "...--", "proud", false)]
    // A repeated Present letter needs two copies
    #[case("speed", "-.--.", "erase", true)]
    #[case("speed", "-.--.", "users", false)]
    // An Exact copy does not also cover a Present copy of the same letter
    #[case("eerie", "*-...", "ember", true)]
    #[case("eerie", "*-...", "equal", false)]
    // Absent letters are not constrained
    #[case("mount", ".....", "mount", true)]
    fn hard_mode_admissibility(
        #[case] guess: &str,
        #[case] feedback: &str,
        #[case] next: &str,
        #[case] allowed: bool,
    ) {
        assert_eq!(clue(guess, feedback).allows_as_next_guess(&word(next)), allowed);
    }

    #[test]
    fn answer_is_always_admissible() {
        let answer = word("perky");
        for guess in ["mount", "deals", "fiber", "weepy", "perky", "kempt"] {
            let clue = Clue::from_answer(word(guess), &answer).unwrap();
            assert!(clue.allows_as_next_guess(&answer), "{clue}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(clue("weepy", ".*.-*").to_string(), "weepy .*.-*");
    }
}
