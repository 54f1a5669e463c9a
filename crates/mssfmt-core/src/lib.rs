//! # mssfmt-core
//!
//! Scanner and SELECT parser for T-SQL scripts, the core of the `mssfmt`
//! formatter.
//!
//! This crate provides:
//! - A hand-written scanner that keeps comments and original spelling,
//!   fuses multi-word keywords (`GROUP BY`) and handles nested block
//!   comments, doubled-quote escapes and delimited identifiers
//! - A [`WordStream`] that reproduces the scanned script byte for byte
//! - A recursive descent parser for SELECT statements that degrades to
//!   absent clauses plus diagnostics instead of failing
//!
//! ```rust
//! use mssfmt_core::{parse_script, Token};
//!
//! let script = parse_script("q.sql", "SELECT TOP 5 a, b FROM dbo.T AS t");
//! assert!(script.diagnostics.is_empty());
//!
//! let query = &script.queries[0];
//! assert_eq!(query.columns.len(), 2);
//! assert_eq!(query.top.as_ref().map(|t| t.expr.tokens()), Some(vec![Token::Int]));
//! assert_eq!(query.from.as_ref().map(|f| f.table.name.as_str()), Some("dbo.T"));
//! assert_eq!(script.words.reconstruct(), "SELECT TOP 5 a, b FROM dbo.T AS t");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Expression, SelectQuery};
pub use error::Error;
pub use lexer::{LexError, Position, Scanner, Span, Token, Word, WordStream};
pub use parser::{ParseError, Parser};

/// A scanned and parsed script.
#[derive(Debug, Clone)]
pub struct ParsedScript {
    /// Every word of the script.
    pub words: WordStream,
    /// The top-level SELECT statements, in source order.
    pub queries: Vec<SelectQuery>,
    /// Lexical diagnostics followed by syntax diagnostics.
    pub diagnostics: Vec<Error>,
}

/// Scans `source` and parses every top-level SELECT in it.
#[must_use]
pub fn parse_script(name: impl Into<String>, source: impl Into<String>) -> ParsedScript {
    let words = WordStream::scan(name, source);
    let mut parser = Parser::new(&words);
    let queries = parser.parse_script();

    let diagnostics = words
        .diagnostics()
        .iter()
        .cloned()
        .map(Error::from)
        .chain(parser.into_diagnostics().into_iter().map(Error::from))
        .collect();

    ParsedScript {
        words,
        queries,
        diagnostics,
    }
}
