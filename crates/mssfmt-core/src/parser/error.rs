//! Parser error types.

use crate::lexer::{Position, Token, Word};

/// A syntax diagnostic. The parser records it, abandons the clause it was
/// in and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A word other than the expected one.
    #[error("{position}: unexpected token: expected {expected}, found {found} `{literal}`")]
    UnexpectedToken {
        /// What the grammar wanted.
        expected: String,
        /// The token found instead.
        found: Token,
        /// Its spelling.
        literal: String,
        /// Where it was found.
        position: Position,
    },

    /// The script ended where the grammar wanted more.
    #[error("{position}: unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the grammar wanted.
        expected: String,
        /// End of the script.
        position: Position,
    },
}

impl ParseError {
    /// Creates an error for `found` not being `expected`.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Word, position: Position) -> Self {
        let expected = expected.into();
        if found.is_eof() {
            Self::UnexpectedEof { expected, position }
        } else {
            Self::UnexpectedToken {
                expected,
                found: found.token,
                literal: found.literal.clone(),
                position,
            }
        }
    }

    /// Returns the position the diagnostic points at.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::UnexpectedToken { position, .. } | Self::UnexpectedEof { position, .. } => {
                position
            }
        }
    }
}
