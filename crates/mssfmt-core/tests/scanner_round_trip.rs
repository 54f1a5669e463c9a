//! Tests that scanning loses nothing: the word stream reproduces the input.

mod common;
use common::*;

use mssfmt_core::{Token, WordStream};

#[test]
fn round_trip_simple_select() {
    round_trip("SELECT a, b FROM t WHERE a = 1;");
}

#[test]
fn round_trip_keeps_whitespace_and_comments() {
    round_trip(" Select\n\tx.A,\t--some comment here\n\tx.ColName,  /* another comment /*\n\t-- */\n\t*/\n\t(154.12 + 5412) * 4.2 as Crap\nfRoM\n\ttableName x ");
}

#[test]
fn round_trip_multiword_keywords() {
    round_trip("SELECT a FROM t group \t\n by a ORDER /* why */ BY a");
}

#[test]
fn round_trip_strings_and_identifiers() {
    round_trip("SELECT 'Cox''', N'ąę', [odd name], \"quoted\", @v, #tmp");
}

#[test]
fn round_trip_byte_order_mark_and_crlf() {
    round_trip("\u{feff}SELECT 1\r\nGO\r\n");
}

#[test]
fn round_trip_unterminated_constructs() {
    round_trip("SELECT 'open");
    round_trip("SELECT /* open /* */");
    round_trip("SELECT [open");
    round_trip("SELECT a ? b ! c");
}

#[test]
fn round_trip_empty_and_blank() {
    round_trip("");
    round_trip(" \n\t\r ");
}

#[test]
fn nested_comment_is_one_word() {
    let words = WordStream::scan("", "/* /*/*/* x\n */*/*/ */");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].token, Token::Comment);
    assert_eq!(words[0].literal, "/* /*/*/* x\n */*/*/ */");
}

#[test]
fn escaped_trailing_quote_is_one_string() {
    let words = WordStream::scan("", "'Cox'''");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].token, Token::String);
    assert_eq!(words[0].literal, "'Cox'''");
}

#[test]
fn group_by_across_whitespace_is_one_word() {
    let words = WordStream::scan("", "group \t\n by");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].token, Token::GroupBy);
}

#[test]
fn group_alone_is_identifier() {
    let words = WordStream::scan("", "group ;");
    assert_eq!(words[0].token, Token::Ident);
    assert_eq!(words[0].literal, "group");
    assert_eq!(words[1].token, Token::Semicolon);
}

#[test]
fn unterminated_constructs_report_diagnostics() {
    for sql in ["'abc", "/* abc", "[abc", "\"abc"] {
        let words = WordStream::scan("", sql);
        assert_eq!(words.len(), 1, "{sql}");
        assert_eq!(words[0].token, Token::Illegal, "{sql}");
        assert_eq!(words.diagnostics().len(), 1, "{sql}");
        assert_eq!(words.diagnostics()[0].position().column, 1, "{sql}");
    }
}

#[test]
fn keyword_lookup_ignores_case() {
    for s in ["select", "SeLeCt", "froM", "with", "ties", "tablename", "order by"] {
        assert_eq!(
            Token::lookup_keyword(s),
            Token::lookup_keyword(&s.to_ascii_uppercase())
        );
    }
}
