//! Scanned words.

use super::{Span, Token};

/// A scanned token together with its original spelling.
///
/// The literal keeps the source casing (`froM` scans as [`Token::From`] with
/// literal `"froM"`); casing decisions are made from the literal downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Word {
    /// The lexical category.
    pub token: Token,
    /// The spelling. For multi-word keywords the parts are joined by a single
    /// space; `span` still covers the original text.
    pub literal: String,
    /// Byte range in the scanned buffer.
    pub span: Span,
}

impl Word {
    /// Creates a new word.
    #[must_use]
    pub fn new(token: Token, literal: impl Into<String>, span: Span) -> Self {
        Self {
            token,
            literal: literal.into(),
            span,
        }
    }

    /// Creates the end-of-input word at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            token: Token::Eof,
            literal: String::new(),
            span: Span::new(offset, offset),
        }
    }

    /// Returns true if this is the end-of-input word.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.token == Token::Eof
    }

    /// Returns true if this is a comment.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.token == Token::Comment
    }
}
