//! # mssfmt
//!
//! Command-line front end for `mssfmt-core`: loads T-SQL scripts, dumps
//! their words and parsed SELECT statements, and rewrites keyword case.

pub mod error;
pub mod loader;
pub mod printer;
pub mod report;

pub use error::{CliError, Result};
pub use loader::{load_script, Script};
pub use printer::{render, KeywordCase};
pub use report::ParseReport;
