//! Solver settings: how guesses are ranked and how games are played out

use super::Score;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// What a guess is ranked by before tie-breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    /// Smallest sum of squared cluster sizes, i.e. smallest expected
    /// number of surviving candidates
    #[default]
    ExpectedSize,
    /// Smallest worst-case cluster, then expected size
    WorstCase,
    /// Most information in bits, then expected size
    Entropy,
}

impl Objective {
    /// Name accepted by [`Objective::from_str`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExpectedSize => "expected-size",
            Self::WorstCase => "worst-case",
            Self::Entropy => "entropy",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expected-size" | "expected" => Ok(Self::ExpectedSize),
            "worst-case" | "minimax" => Ok(Self::WorstCase),
            "entropy" => Ok(Self::Entropy),
            other => Err(format!(
                "unknown objective '{other}' (expected-size, worst-case, entropy)"
            )),
        }
    }
}

/// Total order over scored guesses; the smallest is the best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ranking {
    pub objective: Objective,
    /// On an objective tie, rank a guess that could itself be the answer first
    pub prefer_candidates: bool,
}

impl Default for Ranking {
    fn default() -> Self {
        Self {
            objective: Objective::ExpectedSize,
            prefer_candidates: true,
        }
    }
}

impl Ranking {
    #[must_use]
    pub const fn new(objective: Objective) -> Self {
        Self {
            objective,
            prefer_candidates: true,
        }
    }

    #[must_use]
    pub const fn with_prefer_candidates(mut self, prefer_candidates: bool) -> Self {
        self.prefer_candidates = prefer_candidates;
        self
    }

    /// Compare two scores taken over the same candidate set
    ///
    /// Order: the objective, then candidate preference, then sum of squares,
    /// then word order. No two distinct guesses compare equal.
    #[must_use]
    pub fn compare(&self, a: &Score, b: &Score) -> Ordering {
        let by_objective = match self.objective {
            Objective::ExpectedSize => a.sum_of_squares().cmp(&b.sum_of_squares()),
            Objective::WorstCase => a.worst_case_size().cmp(&b.worst_case_size()),
            Objective::Entropy => b.entropy().total_cmp(&a.entropy()),
        };

        by_objective
            .then_with(|| {
                if self.prefer_candidates {
                    b.is_candidate().cmp(&a.is_candidate())
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| a.sum_of_squares().cmp(&b.sum_of_squares()))
            .then_with(|| a.guess().cmp(b.guess()))
    }
}

/// How a game is played out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Restrict later guesses to words honoring every revealed clue
    pub hard_mode: bool,
    /// Guesses allowed before a game counts as failed. Hard mode's worst case
    /// needs more than the usual six.
    pub max_rounds: usize,
    pub ranking: Ranking,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            hard_mode: true,
            max_rounds: 8,
            ranking: Ranking::default(),
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, WordSet};
    use crate::solver::score_guess;

    fn score(guess: &str, candidates: &WordSet) -> Score {
        score_guess(&Word::new(guess).unwrap(), candidates).unwrap()
    }

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert!(config.hard_mode);
        assert_eq!(config.max_rounds, 8);
        assert_eq!(config.ranking.objective, Objective::ExpectedSize);
        assert!(config.ranking.prefer_candidates);
    }

    #[test]
    fn builders() {
        let config = SolverConfig::default()
            .with_hard_mode(false)
            .with_max_rounds(6)
            .with_ranking(Ranking::new(Objective::Entropy).with_prefer_candidates(false));
        assert!(!config.hard_mode);
        assert_eq!(config.max_rounds, 6);
        assert_eq!(config.ranking.objective, Objective::Entropy);
        assert!(!config.ranking.prefer_candidates);
    }

    #[test]
    fn objective_names_round_trip() {
        for objective in [
            Objective::ExpectedSize,
            Objective::WorstCase,
            Objective::Entropy,
        ] {
            assert_eq!(objective.name().parse::<Objective>(), Ok(objective));
        }
        assert_eq!("MINIMAX".parse::<Objective>(), Ok(Objective::WorstCase));
        assert!("fastest".parse::<Objective>().is_err());
    }

    #[test]
    fn expected_size_objective() {
        let candidates = WordSet::new(["ab", "ba"]).unwrap();
        let ab = score("ab", &candidates);
        let bb = score("bb", &candidates);
        let cc = score("cc", &candidates);
        assert_eq!(ab.sum_of_squares(), 1);
        assert_eq!(bb.sum_of_squares(), 2);
        assert_eq!(cc.sum_of_squares(), 4);

        let ranking = Ranking::default();
        assert_eq!(ranking.compare(&ab, &bb), Ordering::Less);
        assert_eq!(ranking.compare(&cc, &bb), Ordering::Greater);
        assert_eq!(ranking.compare(&bb, &bb), Ordering::Equal);
    }

    #[test]
    fn candidate_preference_breaks_objective_ties() {
        let candidates = WordSet::new(["ab", "ac", "ad", "cd", "ef"]).unwrap();
        // Candidate: {ac, ad} and {cd, ef}
        let ab = score("ab", &candidates);
        // Not a candidate: {ab, ad} and three singletons
        let ca = score("ca", &candidates);
        assert_eq!(ab.worst_case_size(), 2);
        assert_eq!(ca.worst_case_size(), 2);
        assert_eq!(ab.sum_of_squares(), 8);
        assert_eq!(ca.sum_of_squares(), 7);

        let preferring = Ranking::new(Objective::WorstCase);
        assert_eq!(preferring.compare(&ab, &ca), Ordering::Less);

        let neutral = preferring.with_prefer_candidates(false);
        assert_eq!(neutral.compare(&ca, &ab), Ordering::Less);
    }

    #[test]
    fn word_order_breaks_remaining_ties() {
        let candidates = WordSet::new(["ab", "cd"]).unwrap();
        let xy = score("xy", &candidates);
        let yx = score("yx", &candidates);
        assert_eq!(xy.sum_of_squares(), yx.sum_of_squares());
        assert_eq!(Ranking::default().compare(&xy, &yx), Ordering::Less);
    }

    #[test]
    fn worst_case_objective() {
        let candidates = WordSet::new(["ab", "ac", "ad", "bd"]).unwrap();
        let ranking = Ranking::new(Objective::WorstCase);
        let ad = score("ad", &candidates);
        let zz = score("zz", &candidates);
        assert!(ad.worst_case_size() < zz.worst_case_size());
        assert_eq!(ranking.compare(&ad, &zz), Ordering::Less);
    }

    #[test]
    fn entropy_objective_prefers_more_information() {
        let candidates = WordSet::new(["ab", "ac", "ad", "bd"]).unwrap();
        let ranking = Ranking::new(Objective::Entropy);
        let ad = score("ad", &candidates);
        let zz = score("zz", &candidates);
        assert!(ad.entropy() > zz.entropy());
        assert_eq!(ranking.compare(&ad, &zz), Ordering::Less);
    }
}
