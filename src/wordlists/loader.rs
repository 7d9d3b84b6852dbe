//! Word list loading utilities
//!
//! Lists are plain text, one word per line. Blank lines and lines starting
//! with `#` are ignored.

use crate::core::WordSet;
use crate::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load a word list from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it holds no words,
/// a malformed word, or words of different lengths.
///
/// # Examples
/// ```no_run
/// use wordle_clusters::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {words}");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<WordSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read word list {}", path.display()))?;
    words_from_str(&content).with_context(|| format!("invalid word list {}", path.display()))
}

/// Parse a word list held in memory
///
/// # Errors
///
/// Same as [`WordSet::new`].
///
/// # Examples
/// ```
/// use wordle_clusters::wordlists::loader::words_from_str;
///
/// let words = words_from_str("# answers\nperky\n\nDEALS\n").unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_str(text: &str) -> Result<WordSet> {
    WordSet::new(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Load the answer list and the option list for a game
///
/// The options are the guess list (if any) joined with the answers, so every
/// possible answer can always be played.
///
/// # Errors
///
/// Returns an error if either file fails to load, or if the two lists hold
/// words of different lengths.
pub fn load_game_lists(
    answers: &Path,
    guesses: Option<&Path>,
) -> anyhow::Result<(WordSet, WordSet)> {
    let answers = load_from_file(answers)?;
    let options = match guesses {
        Some(path) => load_from_file(path)?
            .union(&answers)
            .context("guess list and answer list have different word lengths")?,
        None => answers.clone(),
    };
    Ok((answers, options))
}
