//! Flat expressions.

use core::fmt;
use core::ops::Range;

use crate::lexer::{Token, Word};

/// A flat run of words cut from the word stream.
///
/// Comments are left out of `words` but stay inside `range`, which indexes
/// the [`WordStream`](crate::lexer::WordStream) the expression was parsed
/// from and is always contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expression {
    words: Vec<Word>,
    range: Range<usize>,
}

impl Expression {
    /// Creates an empty expression; parsers fill it with [`Expression::push`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            range: 0..0,
        }
    }

    /// Appends the word found at `index` in the word stream.
    pub fn push(&mut self, index: usize, word: Word) {
        if self.words.is_empty() {
            self.range = index..index;
        }
        self.range.end = index + 1;
        self.words.push(word);
    }

    /// The words, comments excluded.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word stream indices covered by this expression.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no word was pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The literals of the words, in order.
    #[must_use]
    pub fn literals(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.literal.as_str()).collect()
    }

    /// The tokens of the words, in order.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.words.iter().map(|w| w.token).collect()
    }

    /// Returns `Some(self)` unless empty.
    #[must_use]
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for Expression {
    /// Literals joined by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&word.literal)?;
        }
        Ok(())
    }
}
