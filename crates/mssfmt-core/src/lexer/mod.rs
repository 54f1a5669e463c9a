//! T-SQL Lexer
//!
//! This module provides a hand-written scanner for T-SQL that produces a
//! stream of words, keeping comments and original spelling.

mod error;
mod scanner;
mod span;
mod token;
mod word;
mod words;

pub use error::LexError;
pub use scanner::Scanner;
pub use span::{LineIndex, Position, Span};
pub use token::{Token, HIGHEST_PRECEDENCE, LOWEST_PRECEDENCE};
pub use word::Word;
pub use words::WordStream;
