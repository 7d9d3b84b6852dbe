//! Wordle Cluster Solver
//!
//! A Wordle solver that picks, each round, the guess whose feedback splits the
//! remaining candidates into the smallest clusters: the guess minimizing the
//! sum of squared cluster sizes, which is proportional to the expected number
//! of candidates left. Works for any word length up to 20 and plays hard mode
//! by default.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clusters::core::{Clue, Feedback, Word, WordSet};
//! use wordle_clusters::solver::GameState;
//!
//! let answers = WordSet::new(["perky", "peppy", "merry", "berry", "ferry"]).unwrap();
//! let state = GameState::new(answers.clone(), answers).unwrap();
//!
//! let best = state.choose_next_guess().unwrap();
//! println!("{best}");
//!
//! // Feedback the game showed for that guess
//! let answer = Word::new("ferry").unwrap();
//! let feedback = Feedback::compute(&answer, best.guess()).unwrap();
//! let clue = Clue::new(best.guess().clone(), feedback).unwrap();
//!
//! let next = state.advance(&clue, true).unwrap();
//! assert!(next.candidates().contains(&answer));
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Scoring, game state and simulation
pub mod solver;

// Word list files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, ErrorKind, Result};
