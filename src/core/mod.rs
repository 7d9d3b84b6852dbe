//! Core domain types for Wordle
//!
//! Words, word sets, feedback and clues. Nothing here knows about scoring or
//! game strategy; these are the pure building blocks the solver works with.

mod clue;
mod feedback;
mod word;
mod word_set;

pub use clue::Clue;
pub use feedback::{Feedback, Symbol};
pub use word::{MAX_WORD_LEN, Word};
pub use word_set::WordSet;
