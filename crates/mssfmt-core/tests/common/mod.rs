#![allow(dead_code)]

use mssfmt_core::{parse_script, Error, ParseError, Parser, SelectQuery, WordStream};

/// Parses the body of a SELECT statement whose `SELECT` is left out.
pub fn parse_after_select(sql: &str) -> (SelectQuery, Vec<ParseError>) {
    let words = WordStream::scan("test.sql", sql);
    let mut parser = Parser::new(&words);
    let query = parser.select_query();
    (query, parser.into_diagnostics())
}

/// Parses a script that must hold exactly one SELECT and no diagnostics.
pub fn parse_select(sql: &str) -> SelectQuery {
    let mut script = parse_script("test.sql", sql);
    assert!(
        script.diagnostics.is_empty(),
        "Unexpected diagnostics for: {sql}\n{:?}",
        script.diagnostics
    );
    assert_eq!(script.queries.len(), 1, "Expected one SELECT in: {sql}");
    script.queries.remove(0)
}

/// Parses a script that must produce at least one diagnostic.
pub fn parse_diagnostics(sql: &str) -> Vec<Error> {
    let script = parse_script("test.sql", sql);
    assert!(
        !script.diagnostics.is_empty(),
        "Expected diagnostics for: {sql}"
    );
    script.diagnostics
}

/// Verifies that the word stream gives back the input byte for byte.
pub fn round_trip(sql: &str) {
    let words = WordStream::scan("test.sql", sql);
    assert_eq!(words.reconstruct(), sql, "Round-trip failed for: {sql:?}");
}
