//! Guess scoring, game states and simulated play
//!
//! Guesses are ranked by how small they are expected to leave the candidate
//! set, measured as the sum of squared cluster sizes (see [`Score`]).

mod config;
mod score;
mod simulation;
mod state;

pub use config::{Objective, Ranking, SolverConfig};
pub use score::{Score, score_guess};
pub use simulation::{BatchReport, Round, Trace, simulate, simulate_with_opening, solve_all};
pub use state::GameState;
