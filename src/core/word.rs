//! Word representation
//!
//! A Word is a lowercase ASCII word of any length up to [`MAX_WORD_LEN`].
//! All words in one game share a length; that is enforced by
//! [`WordSet`](super::WordSet), not here.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Longest supported word. Feedback for a word this long still packs into a `u32`.
pub const MAX_WORD_LEN: usize = 20;

/// Number of distinct letters a word may contain
pub(crate) const ALPHABET_LEN: usize = 26;

/// A validated, case-normalized word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased.
    ///
    /// # Errors
    /// Returns [`Error::WordLength`] if the trimmed text is empty or longer than
    /// [`MAX_WORD_LEN`], and [`Error::InvalidCharacters`] if it contains anything
    /// but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_clusters::core::Word;
    ///
    /// let word = Word::new("Perky").unwrap();
    /// assert_eq!(word.text(), "perky");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim();

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidCharacters(text.to_string()));
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(Error::WordLength {
                max: MAX_WORD_LEN,
                found: text.len(),
            });
        }

        Ok(Self {
            text: text.to_ascii_lowercase().into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.as_bytes().contains(&letter.to_ascii_lowercase())
    }
}

/// Slot of a lowercase ASCII letter in a 26-entry table
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
