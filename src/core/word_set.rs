//! Immutable sets of equal-length words
//!
//! Every set derived from the same source list shares one sorted [`Lexicon`]
//! and stores only the ids of its members. Filtering a set of thousands of
//! words therefore copies a slice of `u32`s, never the words themselves.

use super::Word;
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Sorted, deduplicated dictionary; a word's id is its index
#[derive(Debug)]
struct Lexicon {
    words: Vec<Word>,
    word_len: usize,
}

/// A set of words of one length, iterated in lexicographic order
///
/// Cloning is cheap. A set never changes after construction; [`WordSet::filter`]
/// and [`WordSet::union`] return new sets.
#[derive(Debug, Clone)]
pub struct WordSet {
    lexicon: Arc<Lexicon>,
    /// Ascending, so iteration follows the lexicon's order
    ids: Arc<[u32]>,
}

impl WordSet {
    /// Build a set from raw text
    ///
    /// Words are trimmed and lowercased; duplicates collapse.
    ///
    /// # Errors
    /// - [`Error::EmptyWordSet`] if no words are given
    /// - [`Error::WordLength`] or [`Error::InvalidCharacters`] for a malformed word
    /// - [`Error::LengthMismatch`] if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_clusters::core::WordSet;
    ///
    /// let set = WordSet::new(["perky", "Deals", "perky"]).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.word_len(), 5);
    ///
    /// assert!(WordSet::new(["perky", "pert"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>>>()?;
        Self::from_words(words)
    }

    /// Build a set from already validated words
    ///
    /// # Errors
    /// [`Error::EmptyWordSet`] if `words` is empty, [`Error::LengthMismatch`] if
    /// the words differ in length.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut words: Vec<Word> = words.into_iter().collect();
        let word_len = words.first().map(Word::len).ok_or(Error::EmptyWordSet)?;

        if let Some(odd) = words.iter().find(|w| w.len() != word_len) {
            return Err(Error::LengthMismatch {
                expected: word_len,
                found: odd.len(),
            });
        }

        words.sort_unstable();
        words.dedup();

        let ids = (0..words.len() as u32).collect();
        Ok(Self {
            lexicon: Arc::new(Lexicon { words, word_len }),
            ids,
        })
    }

    fn derive(&self, ids: Vec<u32>) -> Self {
        Self {
            lexicon: Arc::clone(&self.lexicon),
            ids: ids.into(),
        }
    }

    #[inline]
    fn word(&self, id: u32) -> &Word {
        &self.lexicon.words[id as usize]
    }

    /// Length shared by every word of this set (and of sets derived from it)
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.lexicon.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Only derived sets can be empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lexicon
            .words
            .binary_search(word)
            .is_ok_and(|id| self.ids.binary_search(&(id as u32)).is_ok())
    }

    /// Look a word up by its text, ignoring case and surrounding whitespace
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        let id = self.lexicon.words.binary_search(&word).ok()? as u32;
        self.ids.binary_search(&id).ok().map(|_| self.word(id))
    }

    /// Words in lexicographic order
    #[must_use]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.ids.iter().map(|&id| self.word(id))
    }

    #[must_use]
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = &Word> + '_ {
        self.ids.par_iter().map(|&id| self.word(id))
    }

    /// Subset of the words matching `keep`; order is preserved
    #[must_use]
    pub fn filter<F>(&self, keep: F) -> Self
    where
        F: Fn(&Word) -> bool + Sync,
    {
        let ids = self
            .ids
            .par_iter()
            .copied()
            .filter(|&id| keep(self.word(id)))
            .collect();
        self.derive(ids)
    }

    /// Words in either set
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the sets hold words of different
    /// lengths.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if self.word_len() != other.word_len() {
            return Err(Error::LengthMismatch {
                expected: self.word_len(),
                found: other.word_len(),
            });
        }

        if Arc::ptr_eq(&self.lexicon, &other.lexicon) {
            let mut ids = Vec::with_capacity(self.len() + other.len());
            let (mut a, mut b) = (self.ids.iter().peekable(), other.ids.iter().peekable());
            while let (Some(&&x), Some(&&y)) = (a.peek(), b.peek()) {
                ids.push(x.min(y));
                if x <= y {
                    a.next();
                }
                if y <= x {
                    b.next();
                }
            }
            ids.extend(a.chain(b).copied());
            return Ok(self.derive(ids));
        }

        let words: Vec<Word> = self.iter().chain(other.iter()).cloned().collect();
        if words.is_empty() {
            return Ok(self.clone());
        }
        Self::from_words(words)
    }

    /// Up to `n` words, the first ones in iteration order
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<&Word> {
        self.iter().take(n).collect()
    }

    /// A uniformly random subset of `n` words (all of them if `n >= len`)
    #[must_use]
    pub fn choose_random<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self {
        let mut ids: Vec<u32> = self.ids.choose_multiple(rng, n).copied().collect();
        ids.sort_unstable();
        self.derive(ids)
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words", self.len())?;
        let sample = self.sample(5);
        if !sample.is_empty() {
            let texts: Vec<&str> = sample.iter().map(|w| w.text()).collect();
            write!(f, ", such as {}", texts.join(", "))?;
        }
        Ok(())
    }
}
