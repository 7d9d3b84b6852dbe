//! Feedback computation and its compact text form
//!
//! A Feedback packs one [`Symbol`] per letter into a base-3 number:
//! - 0 = Absent (letter not in the answer, or all copies already used)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Exact (letter in the right position)
//!
//! Position `i` contributes `digit × 3^i`. With at most [`MAX_WORD_LEN`]
//! positions the code always fits in a `u32`, which keeps Feedback `Copy` and
//! cheap to hash while scoring.

use super::Word;
use super::word::{ALPHABET_LEN, MAX_WORD_LEN, letter_index};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Result for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// Grey
    Absent,
    /// Yellow
    Present,
    /// Green
    Exact,
}

impl Symbol {
    /// ASCII token used by [`Feedback`]'s text form
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Exact => '*',
            Self::Present => '-',
            Self::Absent => '.',
        }
    }

    /// Inverse of [`Symbol::token`]
    ///
    /// A space also reads as Absent, and the colored box glyphs are accepted
    /// so that feedback can be pasted straight from a shared game result.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            '*' | '🟩' => Some(Self::Exact),
            '-' | '🟨' => Some(Self::Present),
            '.' | ' ' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

const fn powers_of_three() -> [u32; MAX_WORD_LEN] {
    let mut table = [1u32; MAX_WORD_LEN];
    let mut i = 1;
    while i < MAX_WORD_LEN {
        table[i] = table[i - 1] * 3;
        i += 1;
    }
    table
}

const POW3: [u32; MAX_WORD_LEN] = powers_of_three();

/// Feedback for a whole guess, positionally aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    code: u32,
    len: u8,
}

impl Feedback {
    /// Calculate the feedback `guess` receives when `answer` is the secret
    ///
    /// Implements Wordle's rules for repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches; every unmatched answer letter goes
    ///    into a pool
    /// 2. Second pass: each remaining guess letter found in the pool is
    ///    marked Present and removed from it
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_clusters::core::{Feedback, Word};
    ///
    /// let answer = Word::new("erase").unwrap();
    /// let guess = Word::new("speed").unwrap();
    /// let feedback = Feedback::compute(&answer, &guess).unwrap();
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent)
    /// assert_eq!(feedback.to_string(), "-.--.");
    /// ```
    pub fn compute(answer: &Word, guess: &Word) -> Result<Self> {
        if answer.len() != guess.len() {
            return Err(Error::LengthMismatch {
                expected: answer.len(),
                found: guess.len(),
            });
        }
        Ok(Self::between(answer.as_bytes(), guess.as_bytes()))
    }

    /// Feedback for two equal-length lowercase words, without the length check
    pub(crate) fn between(answer: &[u8], guess: &[u8]) -> Self {
        debug_assert_eq!(answer.len(), guess.len());

        let mut symbols = [Symbol::Absent; MAX_WORD_LEN];
        let mut pool = [0u8; ALPHABET_LEN];

        for (i, (&a, &g)) in answer.iter().zip(guess).enumerate() {
            if a == g {
                symbols[i] = Symbol::Exact;
            } else {
                pool[letter_index(a)] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if symbols[i] == Symbol::Exact {
                continue;
            }
            let available = &mut pool[letter_index(g)];
            if *available > 0 {
                *available -= 1;
                symbols[i] = Symbol::Present;
            }
        }

        Self::pack(&symbols[..guess.len()])
    }

    fn pack(symbols: &[Symbol]) -> Self {
        let code = symbols
            .iter()
            .zip(POW3)
            .map(|(symbol, weight)| symbol.digit() * weight)
            .sum();
        Self {
            code,
            len: symbols.len() as u8,
        }
    }

    /// Build feedback from explicit symbols
    ///
    /// # Errors
    /// Returns [`Error::WordLength`] if there are no symbols or more than
    /// [`MAX_WORD_LEN`].
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self> {
        if symbols.is_empty() || symbols.len() > MAX_WORD_LEN {
            return Err(Error::WordLength {
                max: MAX_WORD_LEN,
                found: symbols.len(),
            });
        }
        Ok(Self::pack(symbols))
    }

    /// The winning feedback for words of `len` letters
    ///
    /// # Errors
    /// Returns [`Error::WordLength`] if `len` is zero or above [`MAX_WORD_LEN`].
    pub fn all_exact(len: usize) -> Result<Self> {
        if len == 0 || len > MAX_WORD_LEN {
            return Err(Error::WordLength {
                max: MAX_WORD_LEN,
                found: len,
            });
        }
        Ok(Self::pack(&[Symbol::Exact; MAX_WORD_LEN][..len]))
    }

    /// Parse the text form, one token per position
    ///
    /// # Errors
    /// Returns [`Error::Parse`] at the first unrecognized token, or
    /// [`Error::WordLength`] if the token count is out of range.
    ///
    /// # Examples
    /// ```
    /// use wordle_clusters::core::{Feedback, Symbol};
    ///
    /// let feedback = Feedback::parse(".*.-*").unwrap();
    /// assert_eq!(feedback.symbol(1), Symbol::Exact);
    /// assert_eq!(feedback, Feedback::parse("⬜🟩⬜🟨🟩").unwrap());
    ///
    /// assert!(Feedback::parse(".*x-*").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let symbols = text
            .chars()
            .enumerate()
            .map(|(position, token)| {
                Symbol::from_token(token).ok_or(Error::Parse { position, token })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_symbols(&symbols)
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always `false` for feedback built through this API
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Symbol at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn symbol(self, position: usize) -> Symbol {
        assert!(position < self.len(), "position {position} out of range");
        Symbol::from_digit(self.code / POW3[position] % 3)
    }

    /// Symbols in guess order
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        (0..self.len()).map(move |position| self.symbol(position))
    }

    /// Check if every position is Exact
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.symbols().all(|symbol| symbol == Symbol::Exact)
    }

    /// Count positions carrying `symbol`
    #[must_use]
    pub fn count(self, symbol: Symbol) -> usize {
        self.symbols().filter(|&s| s == symbol).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols()
            .try_for_each(|symbol| write!(f, "{}", symbol.token()))
    }
}

impl FromStr for Feedback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
