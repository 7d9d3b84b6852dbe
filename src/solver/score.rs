//! Cluster scoring for a single guess
//!
//! Guessing `g` splits the candidates into clusters, one per distinct feedback.
//! If every candidate is equally likely, a cluster of size `s` is hit with
//! probability `s / n` and leaves `s` candidates behind, so the expected
//! number of survivors is `Σ s² / n`. Since `n` is shared by every guess of a
//! round, `Σ s²` alone ranks them.
//!
//! A guess that is itself a candidate contributes no cluster for that
//! candidate: hitting it ends the game.

use crate::core::{Feedback, Word, WordSet};
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// Cluster histogram for one guess over one candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    guess: Word,
    clusters: FxHashMap<Feedback, usize>,
    sum_of_squares: u64,
    candidate_count: usize,
    is_candidate: bool,
}

/// Score `guess` against `candidates`
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if `guess` does not have the candidates'
/// word length.
///
/// # Examples
/// ```
/// use wordle_clusters::core::{Word, WordSet};
/// use wordle_clusters::solver::score_guess;
///
/// let candidates = WordSet::new(["perky", "peppy", "merry", "berry"]).unwrap();
/// let score = score_guess(&Word::new("perky").unwrap(), &candidates).unwrap();
///
/// // peppy alone, merry and berry together
/// assert_eq!(score.sum_of_squares(), 1 + 4);
/// assert_eq!(score.cluster_count(), 2);
/// assert!(score.is_candidate());
/// ```
pub fn score_guess(guess: &Word, candidates: &WordSet) -> Result<Score> {
    if guess.len() != candidates.word_len() {
        return Err(Error::LengthMismatch {
            expected: candidates.word_len(),
            found: guess.len(),
        });
    }
    Ok(Score::tally(guess, candidates))
}

impl Score {
    /// Build the histogram; lengths are already known to agree
    pub(crate) fn tally(guess: &Word, candidates: &WordSet) -> Self {
        let mut clusters: FxHashMap<Feedback, usize> = FxHashMap::default();
        let mut is_candidate = false;

        for candidate in candidates.iter() {
            if candidate == guess {
                is_candidate = true;
                continue;
            }
            let feedback = Feedback::between(candidate.as_bytes(), guess.as_bytes());
            *clusters.entry(feedback).or_insert(0) += 1;
        }

        let sum_of_squares = clusters
            .values()
            .map(|&size| (size as u64) * (size as u64))
            .sum();

        Self {
            guess: guess.clone(),
            clusters,
            sum_of_squares,
            candidate_count: candidates.len(),
            is_candidate,
        }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Feedback to number of candidates producing it, excluding the guess itself
    #[inline]
    #[must_use]
    pub const fn clusters(&self) -> &FxHashMap<Feedback, usize> {
        &self.clusters
    }

    /// The ranking scalar, lower is better
    #[inline]
    #[must_use]
    pub const fn sum_of_squares(&self) -> u64 {
        self.sum_of_squares
    }

    /// Size of the candidate set this score was taken over
    #[inline]
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Whether the guess could itself be the answer
    #[inline]
    #[must_use]
    pub const fn is_candidate(&self) -> bool {
        self.is_candidate
    }

    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Expected number of candidates left after this guess
    #[must_use]
    pub fn expected_size(&self) -> f64 {
        if self.candidate_count == 0 {
            return 0.0;
        }
        self.sum_of_squares as f64 / self.candidate_count as f64
    }

    /// Feedback of the largest cluster
    ///
    /// Ties go to the lower feedback code so the answer does not depend on map
    /// iteration order. `None` when no candidate other than the guess remains.
    #[must_use]
    pub fn worst_case_feedback(&self) -> Option<Feedback> {
        self.clusters
            .iter()
            .max_by(|(fa, sa), (fb, sb)| sa.cmp(sb).then_with(|| fb.code().cmp(&fa.code())))
            .map(|(&feedback, _)| feedback)
    }

    /// Size of the largest cluster, 0 if there is none
    #[must_use]
    pub fn worst_case_size(&self) -> usize {
        self.clusters.values().max().copied().unwrap_or(0)
    }

    /// Shannon entropy of the feedback distribution, in bits
    ///
    /// Counts the winning outcome when the guess is a candidate.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        if self.candidate_count == 0 {
            return 0.0;
        }

        let mut sizes: Vec<usize> = self.clusters.values().copied().collect();
        if self.is_candidate {
            sizes.push(1);
        }
        // Fixed summation order keeps equal histograms bit-for-bit equal
        sizes.sort_unstable();

        let total = self.candidate_count as f64;
        sizes
            .iter()
            .map(|&size| {
                let p = size as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    /// Check if playing this guess against `answer` wins
    #[must_use]
    pub fn solves(&self, answer: &Word) -> bool {
        &self.guess == answer
    }

    /// Clusters from largest to smallest, ties by feedback code
    #[must_use]
    pub fn sorted_clusters(&self) -> Vec<(Feedback, usize)> {
        let mut clusters: Vec<(Feedback, usize)> =
            self.clusters.iter().map(|(&f, &s)| (f, s)).collect();
        clusters.sort_unstable_by(|(fa, sa), (fb, sb)| {
            sb.cmp(sa).then_with(|| fa.code().cmp(&fb.code()))
        });
        clusters
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guess: {} -> expected size: {:.3} (",
            self.guess,
            self.expected_size()
        )?;
        for (i, (feedback, size)) in self.sorted_clusters().into_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{size}:{feedback}")?;
        }
        f.write_str(")")
    }
}
