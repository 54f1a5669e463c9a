//! Keyword-casing printer.
//!
//! Rewrites the case of keyword words and copies every other byte of the
//! script, gaps included, from the source.

use mssfmt_core::{Token, Word, WordStream};

/// How keywords are cased on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum KeywordCase {
    /// `SELECT`, `GROUP BY`
    #[default]
    Upper,
    /// `select`, `group by`
    Lower,
    /// As written.
    Preserve,
}

impl KeywordCase {
    fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_ascii_uppercase(),
            Self::Lower => text.to_ascii_lowercase(),
            Self::Preserve => text.to_owned(),
        }
    }
}

/// Returns true if `word` is cased on output: a keyword, or a plain
/// identifier spelled like a reserved word. Delimited identifiers never are.
fn is_cased(words: &WordStream, word: &Word) -> bool {
    if word.token.is_keyword() {
        return true;
    }
    let text = words.text(word);
    word.token == Token::Ident && !text.starts_with(['[', '"']) && Token::is_reserved_word(text)
}

/// Length of the possibly nested block comment `text` starts with.
fn block_comment_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b'/') => {
                depth = depth.saturating_sub(1);
                i += 2;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }
    text.len()
}

/// Recases the words of a keyword's source text. Whitespace and comments
/// between the parts of a multi-word keyword are copied as written.
fn recase(text: &str, case: KeywordCase) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let part = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if part > 0 {
            out.push_str(&case.apply(&rest[..part]));
            rest = &rest[part..];
            continue;
        }

        let skip = if rest.starts_with("--") {
            rest.find(['\n', '\r']).unwrap_or(rest.len())
        } else if rest.starts_with("/*") {
            block_comment_len(rest)
        } else {
            c.len_utf8()
        };
        out.push_str(&rest[..skip]);
        rest = &rest[skip..];
    }
    out
}

/// Renders `words` with keywords in `case`.
#[must_use]
pub fn render(words: &WordStream, case: KeywordCase) -> String {
    let mut out = String::with_capacity(words.source().len());
    for (index, word) in words.iter().enumerate() {
        out.push_str(words.gap_before(index));
        let text = words.text(word);
        if case != KeywordCase::Preserve && is_cased(words, word) {
            out.push_str(&recase(text, case));
        } else {
            out.push_str(text);
        }
    }
    out.push_str(words.gap_before(words.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(sql: &str, case: KeywordCase) -> String {
        render(&WordStream::scan("test", sql), case)
    }

    #[test]
    fn test_upper() {
        assert_eq!(
            format("select top 5 a, sum(b) from t where a is not null", KeywordCase::Upper),
            "SELECT TOP 5 a, SUM(b) FROM t WHERE a IS NOT NULL"
        );
    }

    #[test]
    fn test_lower() {
        assert_eq!(
            format("SELECT Name FROM dbo.Person ORDER BY Name", KeywordCase::Lower),
            "select Name from dbo.Person order by Name"
        );
    }

    #[test]
    fn test_preserve_is_identity() {
        let sql = "Select x -- Select\nFrOm t";
        assert_eq!(format(sql, KeywordCase::Preserve), sql);
    }

    #[test]
    fn test_comments_strings_identifiers_untouched() {
        assert_eq!(
            format(
                "select 'select', [from], \"where\" /* select */ from t -- from\n",
                KeywordCase::Upper
            ),
            "SELECT 'select', [from], \"where\" /* select */ FROM t -- from\n"
        );
    }

    #[test]
    fn test_multiword_keeps_whitespace() {
        assert_eq!(
            format("select a from t group \n  by a", KeywordCase::Upper),
            "SELECT a FROM t GROUP \n  BY a"
        );
    }

    #[test]
    fn test_multiword_with_comment_keeps_comment() {
        assert_eq!(
            format("select a from t order /* by /* x */ */ by a", KeywordCase::Upper),
            "SELECT a FROM t ORDER /* by /* x */ */ BY a"
        );
        assert_eq!(
            format("SELECT a FROM t GROUP -- Group\r\n BY a", KeywordCase::Lower),
            "select a from t group -- Group\r\n by a"
        );
    }

    #[test]
    fn test_reserved_identifiers() {
        assert_eq!(
            format(
                "select a from t order by a desc; declare @x int; set @x = 1; create table q (a int)",
                KeywordCase::Upper
            ),
            "SELECT a FROM t ORDER BY a DESC; DECLARE @x int; SET @x = 1; CREATE TABLE q (a int)"
        );
        assert_eq!(
            format("SELECT * FROM t WITH (NOLOCK) EXEC sp", KeywordCase::Lower),
            "select * from t with (nolock) exec sp"
        );
    }

    #[test]
    fn test_delimited_reserved_words_untouched() {
        assert_eq!(
            format("select [desc], \"table\", @set from t", KeywordCase::Upper),
            "SELECT [desc], \"table\", @set FROM t"
        );
    }

    #[test]
    fn test_byte_order_mark_survives() {
        assert_eq!(
            format("\u{feff}select 1\r\ngo\r\n", KeywordCase::Upper),
            "\u{feff}SELECT 1\r\nGO\r\n"
        );
    }
}
