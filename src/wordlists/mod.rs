//! Word lists for Wordle solving
//!
//! Lists are read from text files at startup; none are compiled in.

pub mod loader;

pub use loader::{load_from_file, load_game_lists, words_from_str};
