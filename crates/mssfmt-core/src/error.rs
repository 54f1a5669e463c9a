//! Diagnostics from either stage.

use crate::lexer::{LexError, Position};
use crate::parser::ParseError;

/// A lexical or syntax diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Found by the scanner.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Found by the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the position the diagnostic points at.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::Lex(err) => err.position(),
            Self::Parse(err) => err.position(),
        }
    }
}
