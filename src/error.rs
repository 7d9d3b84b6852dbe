//! Error type shared by the solver core
//!
//! Every failure maps onto one of three kinds: caller contract violations,
//! malformed feedback text, and games that cannot be finished.

use thiserror::Error;

/// Broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed something that breaks a documented contract.
    InvalidInput,
    /// Feedback text could not be parsed. The caller may ask again.
    Parse,
    /// The clue history admits no answer, or the round budget ran out.
    Unsolvable,
}

/// Errors produced by word sets, feedback, game states and simulations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected {expected} letters, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("word must have between 1 and {max} letters, got {found}")]
    WordLength { max: usize, found: usize },

    #[error("\"{0}\" contains characters other than ASCII letters")]
    InvalidCharacters(String),

    #[error("a word set needs at least one word")]
    EmptyWordSet,

    #[error("\"{0}\" is not in the word list")]
    UnknownWord(String),

    #[error("unrecognized feedback token '{token}' at position {position}")]
    Parse { position: usize, token: char },

    #[error("no candidate is consistent with {clue}")]
    NoCandidates { clue: String },

    #[error("no admissible guess remains")]
    NoOptions,

    #[error("\"{answer}\" was not solved within {rounds} rounds")]
    BudgetExceeded { answer: String, rounds: usize },
}

impl Error {
    /// Which of the three error categories this falls into
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. }
            | Self::WordLength { .. }
            | Self::InvalidCharacters(_)
            | Self::EmptyWordSet
            | Self::UnknownWord(_) => ErrorKind::InvalidInput,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::NoCandidates { .. } | Self::NoOptions | Self::BudgetExceeded { .. } => {
                ErrorKind::Unsolvable
            }
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
