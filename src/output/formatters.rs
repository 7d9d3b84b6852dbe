//! Formatting utilities for terminal output

use crate::core::{Feedback, Symbol, Word};
use colored::{ColoredString, Colorize};

/// Box glyph for a symbol, as shared games show it
#[must_use]
pub const fn symbol_to_box(symbol: Symbol) -> char {
    match symbol {
        Symbol::Exact => '🟩',
        Symbol::Present => '🟨',
        Symbol::Absent => '⬜',
    }
}

/// Format feedback as a row of colored boxes
#[must_use]
pub fn feedback_to_boxes(feedback: Feedback) -> String {
    feedback.symbols().map(symbol_to_box).collect()
}

/// Uppercase each letter of `word`, colored by its feedback symbol
///
/// Lengths are assumed to match; extra letters are left uncolored.
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let letter = letter.to_ascii_uppercase().to_string();
            let painted: ColoredString = if i >= feedback.len() {
                letter.normal()
            } else {
                match feedback.symbol(i) {
                    Symbol::Exact => letter.black().on_green(),
                    Symbol::Present => letter.black().on_yellow(),
                    Symbol::Absent => letter.white().on_bright_black(),
                }
            };
            painted.to_string()
        })
        .collect()
}

/// Comma-separated words, at most `limit` of them, with a count of the rest
#[must_use]
pub fn word_sample<'a>(
    words: impl IntoIterator<Item = &'a Word>,
    total: usize,
    limit: usize,
) -> String {
    let shown: Vec<&str> = words.into_iter().take(limit).map(Word::text).collect();
    let hidden = total.saturating_sub(shown.len());
    if hidden == 0 {
        shown.join(", ")
    } else {
        format!("{}, … (+{hidden} more)", shown.join(", "))
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
