//! T-SQL scanner implementation.

use tracing::debug;

use super::span::BYTE_ORDER_MARK;
use super::{LexError, LineIndex, Position, Span, Token, Word};

/// A scanner that splits a T-SQL script into words.
///
/// Comments are returned as [`Token::Comment`] words; whitespace is skipped
/// but stays recoverable from the gaps between word spans.
pub struct Scanner<'a> {
    /// Display name of the script, used in diagnostics.
    name: &'a str,
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current word.
    start: usize,
    /// Built on the first diagnostic.
    lines: Option<LineIndex>,
    diagnostics: Vec<LexError>,
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '#' | '@')
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '#' | '@')
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for an unnamed script.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_name("", input)
    }

    /// Creates a new scanner; `name` shows up in diagnostic positions.
    ///
    /// A leading byte-order mark is skipped here, once.
    #[must_use]
    pub fn with_name(name: &'a str, input: &'a str) -> Self {
        let pos = if input.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len_utf8()
        } else {
            0
        };
        Self {
            name,
            input,
            pos,
            start: pos,
            lines: None,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the diagnostics collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[LexError] {
        &self.diagnostics
    }

    /// Consumes the scanner, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<LexError> {
        self.diagnostics
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.pos..].starts_with(prefix)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    fn position_of(&mut self, offset: usize) -> Position {
        let input = self.input;
        self.lines
            .get_or_insert_with(|| LineIndex::new(input))
            .position(self.name, input, offset)
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a word whose literal is the source text of the current span.
    fn make_word(&self, token: Token) -> Word {
        Word::new(token, &self.input[self.start..self.pos], self.make_span())
    }

    /// Turns the rest of the input into one `ILLEGAL` word and records `error`.
    fn unterminated(&mut self, error: fn(Position) -> LexError) -> Word {
        self.pos = self.input.len();
        let err = error(self.position_of(self.start));
        debug!(%err, "scan stopped at end of input");
        self.diagnostics.push(err);
        self.make_word(Token::Illegal)
    }

    /// Scans the next word. Returns an `EOF` word with an empty literal once
    /// the input is exhausted, and keeps returning it.
    #[must_use]
    pub fn scan(&mut self) -> Word {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return self.make_word(Token::Eof);
        };

        match c {
            'N' | 'n' if self.peek_next() == Some('\'') => {
                self.advance();
                self.scan_string()
            }
            '[' => self.scan_delimited_identifier(']'),
            '"' => self.scan_delimited_identifier('"'),
            c if is_identifier_start(c) => self.scan_word(),
            c if c.is_ascii_digit() => self.scan_number(),
            '.' | '+' | '-' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number()
            }
            '-' if self.peek_next() == Some('-') => {
                self.consume_line_comment();
                self.make_word(Token::Comment)
            }
            '/' if self.peek_next() == Some('*') => self.scan_block_comment(),
            '\'' => self.scan_string(),
            _ => self.scan_operator(),
        }
    }

    /// Consumes plain identifier characters.
    fn consume_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }
    }

    /// Scans an identifier, keyword or multi-word keyword.
    fn scan_word(&mut self) -> Word {
        self.consume_identifier();
        let input = self.input;
        let text = &input[self.start..self.pos];

        if text.chars().count() <= 1 {
            return self.make_word(Token::Ident);
        }

        if let Some(more) = Token::multiword_head(text) {
            if let Some(word) = self.scan_multiword(text, more) {
                return word;
            }
        }

        let token = match Token::lookup_keyword(text) {
            Token::Ident => Token::lookup_aggregate(text),
            keyword => keyword,
        };
        self.make_word(token)
    }

    /// Tries to complete the multi-word keyword headed by `head`, which must
    /// be followed by `more` words. Whitespace and comments between the parts
    /// are skipped. On failure the position is restored and `None` returned.
    fn scan_multiword(&mut self, head: &str, more: usize) -> Option<Word> {
        let checkpoint = self.pos;
        let mut phrase = String::from(head);

        for _ in 0..more {
            self.skip_trivia();
            if !self.peek().is_some_and(is_identifier_start) {
                self.pos = checkpoint;
                return None;
            }
            let part_start = self.pos;
            self.consume_identifier();
            phrase.push(' ');
            phrase.push_str(&self.input[part_start..self.pos]);
        }

        match Token::lookup_keyword(&phrase) {
            Token::Ident => {
                self.pos = checkpoint;
                None
            }
            token => Some(Word::new(token, phrase, self.make_span())),
        }
    }

    /// Skips whitespace and comments without producing words or diagnostics.
    fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();
            if self.starts_with("--") {
                self.consume_line_comment();
            } else if self.starts_with("/*") {
                self.consume_block_comment();
            } else {
                break;
            }
        }
    }

    /// Scans a `[...]` or `"..."` identifier verbatim, delimiters included.
    fn scan_delimited_identifier(&mut self, close: char) -> Word {
        self.advance(); // consume opening delimiter
        loop {
            match self.advance() {
                Some(c) if c == close => return self.make_word(Token::Ident),
                Some(_) => {}
                None => {
                    return self.unterminated(|position| LexError::UnterminatedIdentifier {
                        position,
                    })
                }
            }
        }
    }

    /// Scans a number. A leading sign or `.` is part of the literal; the
    /// word is `FLOAT` when it contains a `.`, `INT` otherwise. Exponents
    /// are consumed without validation.
    fn scan_number(&mut self) -> Word {
        let mut token = Token::Int;

        if let Some(sign @ ('+' | '-' | '.')) = self.peek() {
            if sign == '.' {
                token = Token::Float;
            }
            self.advance();
        }

        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' => token = Token::Float,
                'e' | 'E' => {
                    self.advance();
                    if self.peek().is_some_and(|c| c == '+' || c == '-') {
                        self.advance();
                    }
                    continue;
                }
                _ => break,
            }
            self.advance();
        }

        self.make_word(token)
    }

    /// Consumes `--` up to, not including, the end of the line.
    fn consume_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n' && c != '\r') {
            self.advance();
        }
    }

    /// Consumes a possibly nested block comment. Returns false if the input
    /// ends before the outermost comment is closed.
    fn consume_block_comment(&mut self) -> bool {
        self.pos += 2; // consume /*
        let mut depth = 1usize;
        loop {
            if self.starts_with("/*") {
                self.pos += 2;
                depth += 1;
            } else if self.starts_with("*/") {
                self.pos += 2;
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            } else if self.advance().is_none() {
                return false;
            }
        }
    }

    fn scan_block_comment(&mut self) -> Word {
        if self.consume_block_comment() {
            self.make_word(Token::Comment)
        } else {
            self.unterminated(|position| LexError::UnterminatedComment { position })
        }
    }

    /// Scans a string literal; `''` inside it is an escaped quote. The
    /// literal keeps the quotes and escapes verbatim.
    fn scan_string(&mut self) -> Word {
        self.advance(); // consume opening quote
        loop {
            match self.advance() {
                Some('\'') if self.peek() == Some('\'') => {
                    self.advance();
                }
                Some('\'') => return self.make_word(Token::String),
                Some(_) => {}
                None => {
                    return self.unterminated(|position| LexError::UnterminatedString { position })
                }
            }
        }
    }

    fn scan_operator(&mut self) -> Word {
        let Some(c) = self.advance() else {
            return self.make_word(Token::Eof);
        };

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Modulo,
            '=' => Token::Eq,
            '&' => Token::BitAnd,
            '|' => Token::BitOr,
            '^' => Token::BitXor,
            '~' => Token::BitNot,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ']' => Token::RBracket,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            ',' => Token::Comma,
            '.' => Token::Period,
            ';' => Token::Semicolon,
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    Token::LtEq
                }
                Some('>') => {
                    self.advance();
                    Token::NotEq
                }
                _ => Token::Lt,
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::GtEq
                } else {
                    Token::Gt
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                Token::NotEq
            }
            _ => {
                let err = LexError::IllegalCharacter {
                    ch: c,
                    position: self.position_of(self.start),
                };
                debug!(%err, "illegal character");
                self.diagnostics.push(err);
                Token::Illegal
            }
        };

        self.make_word(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(input: &str) -> Vec<Word> {
        let mut scanner = Scanner::new(input);
        let mut words = Vec::new();
        loop {
            let word = scanner.scan();
            if word.is_eof() {
                break;
            }
            words.push(word);
        }
        words
    }

    fn pairs(input: &str) -> Vec<(Token, String)> {
        scan_all(input)
            .into_iter()
            .map(|w| (w.token, w.literal))
            .collect()
    }

    fn pair(token: Token, literal: &str) -> (Token, String) {
        (token, String::from(literal))
    }

    #[test]
    fn test_empty_input() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.scan(), Word::eof(0));
        assert_eq!(scanner.scan(), Word::eof(0));
    }

    #[test]
    fn test_whitespace_only() {
        let mut scanner = Scanner::new(" \t\r\n  ");
        let word = scanner.scan();
        assert!(word.is_eof());
        assert_eq!(word.literal, "");
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let words = scan_all("\u{feff}SELECT x");
        assert_eq!(words[0].token, Token::Select);
        assert_eq!(words[0].span, Span::new(3, 9));
    }

    #[test]
    fn test_keeps_original_casing() {
        assert_eq!(
            pairs("Select x froM t"),
            vec![
                pair(Token::Select, "Select"),
                pair(Token::Ident, "x"),
                pair(Token::From, "froM"),
                pair(Token::Ident, "t"),
            ]
        );
    }

    #[test]
    fn test_single_char_identifier_is_never_keyword() {
        assert_eq!(pairs("x"), vec![pair(Token::Ident, "x")]);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            pairs("       GOSIA    \t DamiansTable\n x.Name"),
            vec![
                pair(Token::Ident, "GOSIA"),
                pair(Token::Ident, "DamiansTable"),
                pair(Token::Ident, "x"),
                pair(Token::Period, "."),
                pair(Token::Ident, "Name"),
            ]
        );
    }

    #[test]
    fn test_identifier_sigils_and_unicode() {
        assert_eq!(
            pairs("VarNa#m3 #tmp @var Ciąg "),
            vec![
                pair(Token::Ident, "VarNa#m3"),
                pair(Token::Ident, "#tmp"),
                pair(Token::Ident, "@var"),
                pair(Token::Ident, "Ciąg"),
            ]
        );
    }

    #[test]
    fn test_delimited_identifiers() {
        assert_eq!(
            pairs("[ illegal var __name] \"Another illegal<!>\" [select]"),
            vec![
                pair(Token::Ident, "[ illegal var __name]"),
                pair(Token::Ident, "\"Another illegal<!>\""),
                pair(Token::Ident, "[select]"),
            ]
        );
    }

    #[test]
    fn test_aggregates() {
        assert_eq!(
            pairs("count_big(*) Sum"),
            vec![
                pair(Token::CountBig, "count_big"),
                pair(Token::LParen, "("),
                pair(Token::Star, "*"),
                pair(Token::RParen, ")"),
                pair(Token::Sum, "Sum"),
            ]
        );
    }

    #[test]
    fn test_multiword_keyword() {
        assert_eq!(
            pairs("group \t\n by"),
            vec![pair(Token::GroupBy, "group by")]
        );
        assert_eq!(
            pairs("Order By x"),
            vec![pair(Token::OrderBy, "Order By"), pair(Token::Ident, "x")]
        );
    }

    #[test]
    fn test_multiword_keyword_span_covers_original_text() {
        let words = scan_all("x GROUP  /* c */ BY y");
        assert_eq!(words[1].token, Token::GroupBy);
        assert_eq!(words[1].literal, "GROUP BY");
        assert_eq!(words[1].span, Span::new(2, 19));
    }

    #[test]
    fn test_multiword_head_alone() {
        assert_eq!(
            pairs("group x"),
            vec![pair(Token::Ident, "group"), pair(Token::Ident, "x")]
        );
        assert_eq!(pairs("group"), vec![pair(Token::Ident, "group")]);
        assert_eq!(
            pairs("order, 1"),
            vec![
                pair(Token::Ident, "order"),
                pair(Token::Comma, ","),
                pair(Token::Int, "1"),
            ]
        );
    }

    #[test]
    fn test_multiword_head_before_unterminated_comment() {
        let mut scanner = Scanner::new("group /* open");
        assert_eq!(scanner.scan().token, Token::Ident);
        assert!(scanner.diagnostics().is_empty());
        assert_eq!(scanner.scan().token, Token::Illegal);
        assert_eq!(scanner.diagnostics().len(), 1);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            pairs("42 512 3.1459 -2.1234 0 2.1324e-5 .5 +7 1E10"),
            vec![
                pair(Token::Int, "42"),
                pair(Token::Int, "512"),
                pair(Token::Float, "3.1459"),
                pair(Token::Float, "-2.1234"),
                pair(Token::Int, "0"),
                pair(Token::Float, "2.1324e-5"),
                pair(Token::Float, ".5"),
                pair(Token::Int, "+7"),
                pair(Token::Int, "1E10"),
            ]
        );
    }

    #[test]
    fn test_line_comments() {
        assert_eq!(
            pairs("--first comment\n SELECT"),
            vec![
                pair(Token::Comment, "--first comment"),
                pair(Token::Select, "SELECT"),
            ]
        );
        assert_eq!(pairs("--\n"), vec![pair(Token::Comment, "--")]);
        assert_eq!(
            pairs("--   Another -- comment\r\n x"),
            vec![
                pair(Token::Comment, "--   Another -- comment"),
                pair(Token::Ident, "x"),
            ]
        );
    }

    #[test]
    fn test_block_comments() {
        for src in [
            "/*comment1*/",
            "/**/",
            "/*comment /*level1*/ level0 */",
            "/* /*/*/* x\n */*/*/ */",
        ] {
            assert_eq!(pairs(src), vec![pair(Token::Comment, src)]);
        }
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut scanner = Scanner::new("x /* a /* b */");
        assert_eq!(scanner.scan().token, Token::Ident);
        let word = scanner.scan();
        assert_eq!(word.token, Token::Illegal);
        assert_eq!(word.literal, "/* a /* b */");
        assert!(scanner.scan().is_eof());
        assert_eq!(
            scanner.diagnostics(),
            &[LexError::UnterminatedComment {
                position: Position::new("", 1, 3)
            }]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            pairs("'''Test' 'stringValue'  'with '' escape'   'Cox''' ''"),
            vec![
                pair(Token::String, "'''Test'"),
                pair(Token::String, "'stringValue'"),
                pair(Token::String, "'with '' escape'"),
                pair(Token::String, "'Cox'''"),
                pair(Token::String, "''"),
            ]
        );
    }

    #[test]
    fn test_unicode_string_prefix() {
        assert_eq!(
            pairs("N'zażółć' n'x' N"),
            vec![
                pair(Token::String, "N'zażółć'"),
                pair(Token::String, "n'x'"),
                pair(Token::Ident, "N"),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = Scanner::with_name("q.sql", "SELECT\n 'abc");
        assert_eq!(scanner.scan().token, Token::Select);
        let word = scanner.scan();
        assert_eq!(word.token, Token::Illegal);
        assert_eq!(word.literal, "'abc");
        assert!(scanner.scan().is_eof());
        assert_eq!(
            scanner.into_diagnostics(),
            vec![LexError::UnterminatedString {
                position: Position::new("q.sql", 2, 2)
            }]
        );
    }

    #[test]
    fn test_unterminated_delimited_identifier() {
        let mut scanner = Scanner::new("[abc def");
        let word = scanner.scan();
        assert_eq!(word.token, Token::Illegal);
        assert_eq!(word.literal, "[abc def");
        assert!(matches!(
            scanner.diagnostics(),
            [LexError::UnterminatedIdentifier { .. }]
        ));
    }

    #[test]
    fn test_operators() {
        let tokens: Vec<Token> = scan_all("+ - * / % = != <> < <= > >= & | ^ ~")
            .into_iter()
            .map(|w| w.token)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Modulo,
                Token::Eq,
                Token::NotEq,
                Token::NotEq,
                Token::Lt,
                Token::LtEq,
                Token::Gt,
                Token::GtEq,
                Token::BitAnd,
                Token::BitOr,
                Token::BitXor,
                Token::BitNot,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        let tokens: Vec<Token> = scan_all("( ) ] { } , . ;")
            .into_iter()
            .map(|w| w.token)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::RParen,
                Token::RBracket,
                Token::LBrace,
                Token::RBrace,
                Token::Comma,
                Token::Period,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_illegal_character() {
        let mut scanner = Scanner::new("a ? b");
        assert_eq!(scanner.scan().token, Token::Ident);
        let word = scanner.scan();
        assert_eq!((word.token, word.literal.as_str()), (Token::Illegal, "?"));
        assert_eq!(scanner.scan().token, Token::Ident);
        assert!(matches!(
            scanner.diagnostics(),
            [LexError::IllegalCharacter { ch: '?', .. }]
        ));
    }

    #[test]
    fn test_first_scan() {
        let src = " Select
	x.A,	--some comment here
	x.ColName,  /* another comment /*
	-- */
	*/
	(154.12 + 5412) * 4.2 as Crap
fRoM
	tableName x ";
        let tokens: Vec<Token> = scan_all(src).into_iter().map(|w| w.token).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Select,
                Token::Ident,
                Token::Period,
                Token::Ident,
                Token::Comma,
                Token::Comment,
                Token::Ident,
                Token::Period,
                Token::Ident,
                Token::Comma,
                Token::Comment,
                Token::LParen,
                Token::Float,
                Token::Plus,
                Token::Int,
                Token::RParen,
                Token::Star,
                Token::Float,
                Token::As,
                Token::Ident,
                Token::From,
                Token::Ident,
                Token::Ident,
            ]
        );
    }
}
