//! T-SQL Parser
//!
//! A hand-written recursive descent parser for SELECT statements.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use parser::Parser;
