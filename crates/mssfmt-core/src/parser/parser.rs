//! T-SQL SELECT parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use crate::ast::{
    DistinctType, Expression, FromClause, Join, JoinType, SelectQuery, TableName, TopClause,
};
use crate::lexer::{Token, Word, WordStream};

/// Statement terminators. They end every run, whatever the nesting.
const fn ends_statement(token: Token) -> bool {
    matches!(token, Token::Eof | Token::Semicolon | Token::Go)
}

/// Tokens that end a select list outside parentheses.
const fn ends_column_list(token: Token) -> bool {
    matches!(
        token,
        Token::From
            | Token::Into
            | Token::Select
            | Token::Update
            | Token::Insert
            | Token::Delete
            | Token::Truncate
            | Token::Where
            | Token::GroupBy
            | Token::Having
            | Token::OrderBy
            | Token::Option
            | Token::Union
            | Token::Except
            | Token::Intersect
            | Token::RParen
    )
}

/// Tokens that end an unparsed clause body outside parentheses.
const fn ends_clause(token: Token) -> bool {
    matches!(
        token,
        Token::Where
            | Token::GroupBy
            | Token::Having
            | Token::OrderBy
            | Token::Option
            | Token::Select
            | Token::Update
            | Token::Insert
            | Token::Delete
            | Token::Truncate
            | Token::Union
            | Token::Except
            | Token::Intersect
            | Token::RParen
    )
}

/// SELECT parser over a scanned [`WordStream`].
///
/// Comments are skipped by the cursor but keep their place in the stream,
/// so every [`Expression`] range still covers them. Malformed input never
/// stops the parse: a clause that cannot be recognized is left absent and
/// a [`ParseError`] is recorded.
pub struct Parser<'s> {
    words: &'s WordStream,
    /// Index of the current word in `words`.
    offset: usize,
    eof: Word,
    diagnostics: Vec<ParseError>,
}

impl<'s> Parser<'s> {
    /// Creates a parser positioned on the first non-comment word.
    #[must_use]
    pub fn new(words: &'s WordStream) -> Self {
        let mut parser = Self {
            words,
            offset: 0,
            eof: words.eof(),
            diagnostics: Vec::new(),
        };
        parser.skip_comments();
        parser
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseError> {
        self.diagnostics
    }

    /// The current word, `EOF` past the end.
    #[must_use]
    pub fn current(&self) -> &Word {
        self.words.get(self.offset).unwrap_or(&self.eof)
    }

    /// Index of the current word in the stream.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Moves to the next non-comment word. A no-op at the end.
    pub fn advance(&mut self) {
        if self.offset >= self.words.len() {
            return;
        }
        self.offset += 1;
        self.skip_comments();
    }

    /// Returns the next non-comment word without moving.
    #[must_use]
    pub fn peek(&self) -> &Word {
        self.words
            .words()
            .get(self.offset + 1..)
            .and_then(|rest| rest.iter().find(|w| !w.is_comment()))
            .unwrap_or(&self.eof)
    }

    fn skip_comments(&mut self) {
        while self.words.get(self.offset).is_some_and(Word::is_comment) {
            self.offset += 1;
        }
    }

    fn check(&self, token: Token) -> bool {
        self.current().token == token
    }

    /// A join keyword that is not the `LEFT(`/`RIGHT(` string function.
    fn at_join(&self) -> bool {
        self.current().token.is_join_start() && self.peek().token != Token::LParen
    }

    /// Appends the current word to `expr` and advances.
    fn push_current(&mut self, expr: &mut Expression) {
        expr.push(self.offset, self.current().clone());
        self.advance();
    }

    fn error(&mut self, expected: &str) {
        let current = self.current();
        let err = ParseError::unexpected(
            expected,
            current,
            self.words.position(current.span.start),
        );
        debug!(%err, "syntax error");
        self.diagnostics.push(err);
    }

    /// Parses every top-level SELECT statement in the stream, skipping
    /// whatever else the script contains. SELECTs nested in parentheses
    /// belong to the statement around them.
    pub fn parse_script(&mut self) -> Vec<SelectQuery> {
        let mut queries = Vec::new();
        while !self.current().is_eof() {
            match self.parse_select() {
                Some(query) => queries.push(query),
                None => self.advance(),
            }
        }
        queries
    }

    /// Parses a SELECT statement if the current word is `SELECT`.
    pub fn parse_select(&mut self) -> Option<SelectQuery> {
        if !self.check(Token::Select) {
            return None;
        }
        let start = self.offset;
        self.advance();
        Some(self.select_body(start))
    }

    /// Parses the rest of a SELECT statement whose `SELECT` keyword was
    /// already consumed. The query range starts at the current word.
    pub fn select_query(&mut self) -> SelectQuery {
        self.select_body(self.offset)
    }

    fn select_body(&mut self, start: usize) -> SelectQuery {
        let distinct = self.distinct();
        let top = self.top();
        let columns = self.column_list();
        let into = self.into_clause();
        let from = self.from_clause();
        let where_clause = self.clause_body(Token::Where);
        let group_by = self.clause_body(Token::GroupBy);
        let having = self.clause_body(Token::Having);
        let order_by = self.clause_body(Token::OrderBy);
        let options = self.clause_body(Token::Option);

        let query = SelectQuery {
            distinct,
            top,
            columns,
            into,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            options,
            range: start..self.offset,
        };
        trace!(
            start,
            end = self.offset,
            columns = query.columns.len(),
            joins = query.from.as_ref().map_or(0, |f| f.joins.len()),
            "parsed SELECT"
        );
        query
    }

    /// `[ ALL | DISTINCT ]`
    fn distinct(&mut self) -> Option<DistinctType> {
        let distinct = match self.current().token {
            Token::All => DistinctType::All,
            Token::Distinct => DistinctType::Distinct,
            _ => return None,
        };
        self.advance();
        Some(distinct)
    }

    /// `TOP ( expression ) [ PERCENT ] [ WITH TIES ]`, the parentheses being
    /// optional around a plain number.
    fn top(&mut self) -> Option<TopClause> {
        if !self.check(Token::Top) {
            return None;
        }
        self.advance();

        let mut expr = Expression::new();
        match self.current().token {
            Token::LParen => {
                if !self.parenthesized(&mut expr) {
                    return None;
                }
            }
            Token::Int | Token::Float => self.push_current(&mut expr),
            _ => {
                self.error("( or number after TOP");
                return None;
            }
        }

        let percent = self.check(Token::Percent);
        if percent {
            self.advance();
        }

        // A bare WITH belongs to whatever follows, e.g. a CTE.
        let with_ties = self.check(Token::With) && self.peek().token == Token::Ties;
        if with_ties {
            self.advance();
            self.advance();
        }

        Some(TopClause {
            expr,
            percent,
            with_ties,
        })
    }

    /// Pushes a balanced `( ... )` run, parentheses included. Returns false
    /// if the statement ends before the parentheses close.
    fn parenthesized(&mut self, expr: &mut Expression) -> bool {
        let mut depth = 0usize;
        loop {
            let token = self.current().token;
            if ends_statement(token) {
                self.error(")");
                return false;
            }
            match token {
                Token::LParen => depth += 1,
                Token::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.push_current(expr);
            if depth == 0 {
                return true;
            }
        }
    }

    /// Comma-separated select list. Commas inside parentheses belong to the
    /// enclosing item.
    fn column_list(&mut self) -> Vec<Expression> {
        let mut columns = Vec::new();
        let mut column = Expression::new();
        let mut depth = 0usize;

        loop {
            let token = self.current().token;
            if ends_statement(token) || (depth == 0 && ends_column_list(token)) {
                break;
            }
            match token {
                Token::Comma if depth == 0 => {
                    match core::mem::take(&mut column).non_empty() {
                        Some(done) => columns.push(done),
                        None => self.error("column expression"),
                    }
                    self.advance();
                    continue;
                }
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                _ => {}
            }
            self.push_current(&mut column);
        }

        match column.non_empty() {
            Some(done) => columns.push(done),
            None => self.error("column expression"),
        }
        columns
    }

    /// `INTO new_table`
    fn into_clause(&mut self) -> Option<String> {
        if !self.check(Token::Into) {
            return None;
        }
        self.advance();
        if self.check(Token::Ident) {
            Some(self.qualified_name())
        } else {
            self.error("table name after INTO");
            None
        }
    }

    /// A possibly dotted name; the current word must be an identifier.
    fn qualified_name(&mut self) -> String {
        let mut name = self.current().literal.clone();
        self.advance();
        while self.check(Token::Period) && self.peek().token == Token::Ident {
            self.advance();
            name.push('.');
            name.push_str(&self.current().literal);
            self.advance();
        }
        name
    }

    /// `FROM source [ join ... ]`
    fn from_clause(&mut self) -> Option<FromClause> {
        if !self.check(Token::From) {
            return None;
        }
        self.advance();

        let table = self.table_source("table name or ( after FROM")?;
        let mut joins = Vec::new();
        while self.at_join() {
            match self.join() {
                Some(join) => joins.push(join),
                None => break,
            }
        }
        Some(FromClause { table, joins })
    }

    /// A table name or a parenthesized derived table, then alias and hints.
    fn table_source(&mut self, expected: &str) -> Option<TableName> {
        let mut table = match self.current().token {
            Token::Ident => TableName::new(self.qualified_name()),
            Token::LParen => {
                let mut query = Expression::new();
                if !self.parenthesized(&mut query) {
                    return None;
                }
                trace!(words = query.len(), "derived table");
                TableName::derived(query)
            }
            _ => {
                self.error(expected);
                return None;
            }
        };

        if self.check(Token::As) {
            table.as_keyword = true;
            self.advance();
        }
        if self.check(Token::Ident) {
            table.alias = Some(self.current().literal.clone());
            self.advance();
        } else if table.as_keyword {
            self.error("alias after AS");
        }

        if self.check(Token::With) && self.peek().token == Token::LParen {
            let mut hints = Expression::new();
            self.push_current(&mut hints);
            if self.parenthesized(&mut hints) {
                table.hints = Some(hints);
            }
        }

        Some(table)
    }

    fn outer_join(&mut self, plain: JoinType, outer: JoinType) -> JoinType {
        if self.check(Token::Outer) {
            self.advance();
            outer
        } else {
            plain
        }
    }

    /// `[ INNER | { LEFT | RIGHT | FULL } [ OUTER ] | CROSS ] JOIN table [ ON condition ]`
    fn join(&mut self) -> Option<Join> {
        let join_type = match self.current().token {
            Token::Join => JoinType::Inner,
            Token::Inner => {
                self.advance();
                JoinType::Inner
            }
            Token::Left => {
                self.advance();
                self.outer_join(JoinType::Left, JoinType::LeftOuter)
            }
            Token::Right => {
                self.advance();
                self.outer_join(JoinType::Right, JoinType::RightOuter)
            }
            Token::Full => {
                self.advance();
                self.outer_join(JoinType::Full, JoinType::FullOuter)
            }
            Token::Cross => {
                self.advance();
                JoinType::Cross
            }
            _ => return None,
        };

        if !self.check(Token::Join) {
            self.error("JOIN");
            return None;
        }
        self.advance();

        let right_table = self.table_source("table name or ( after JOIN")?;

        let condition = if join_type == JoinType::Cross {
            None
        } else if self.check(Token::On) {
            self.advance();
            let condition = self.clause_run(true).non_empty();
            if condition.is_none() {
                self.error("join condition");
            }
            condition
        } else {
            self.error("ON");
            None
        };

        Some(Join {
            join_type,
            right_table,
            condition,
        })
    }

    /// `keyword body`, the body kept as an unparsed run.
    fn clause_body(&mut self, keyword: Token) -> Option<Expression> {
        if !self.check(keyword) {
            return None;
        }
        self.advance();
        let body = self.clause_run(false).non_empty();
        if body.is_none() {
            self.error(&format!("expression after {keyword}"));
        }
        body
    }

    /// Collects words up to the next clause boundary outside parentheses.
    fn clause_run(&mut self, stop_at_join: bool) -> Expression {
        let mut run = Expression::new();
        let mut depth = 0usize;

        loop {
            let token = self.current().token;
            if ends_statement(token) {
                break;
            }
            if depth == 0 {
                if ends_clause(token) || (stop_at_join && self.at_join()) {
                    break;
                }
                // WITH ROLLUP / WITH CUBE / WITH ( ... ) continue the clause.
                if token == Token::With
                    && !matches!(
                        self.peek().token,
                        Token::Rollup | Token::Cube | Token::LParen
                    )
                {
                    break;
                }
            }
            match token {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                _ => {}
            }
            self.push_current(&mut run);
        }

        run
    }
}
