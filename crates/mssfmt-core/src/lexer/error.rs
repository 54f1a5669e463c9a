//! Lexical diagnostics.

use super::Position;

/// A problem found while scanning. Scanning always continues past it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal with no closing quote.
    #[error("{position}: unterminated string literal")]
    UnterminatedString {
        /// Where the literal starts.
        position: Position,
    },

    /// A block comment whose nesting never returns to zero.
    #[error("{position}: unterminated block comment")]
    UnterminatedComment {
        /// Where the comment starts.
        position: Position,
    },

    /// A `[...]` or `"..."` identifier with no closing delimiter.
    #[error("{position}: unterminated delimited identifier")]
    UnterminatedIdentifier {
        /// Where the identifier starts.
        position: Position,
    },

    /// A character that starts no token.
    #[error("{position}: illegal character {ch:?}")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
        /// Where it was found.
        position: Position,
    },
}

impl LexError {
    /// Returns the position the diagnostic points at.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::UnterminatedString { position }
            | Self::UnterminatedComment { position }
            | Self::UnterminatedIdentifier { position }
            | Self::IllegalCharacter { position, .. } => position,
        }
    }
}
