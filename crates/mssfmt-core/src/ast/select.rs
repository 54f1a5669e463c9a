//! SELECT statement AST types.
//!
//! ```text
//! SELECT [ ALL | DISTINCT ]
//!     [ TOP ( expression ) [ PERCENT ] [ WITH TIES ] ]
//!     <select_list>
//!     [ INTO new_table ]
//!     [ FROM <table_source> [ <join> ... ] ]
//!     [ WHERE <search_condition> ]
//!     [ GROUP BY ... ]
//!     [ HAVING <search_condition> ]
//!     [ ORDER BY ... ]
//!     [ OPTION ( <query_hint> [ ,...n ] ) ]
//! ```

use core::ops::Range;

use super::Expression;

/// `ALL` or `DISTINCT` after `SELECT`. At most one of them can be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DistinctType {
    /// SELECT ALL
    All,
    /// SELECT DISTINCT
    Distinct,
}

impl DistinctType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Distinct => "DISTINCT",
        }
    }
}

/// `TOP ( expression ) [ PERCENT ] [ WITH TIES ]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TopClause {
    /// The row count, either a single number or a parenthesized run
    /// including its parentheses. Never empty.
    pub expr: Expression,
    /// `PERCENT` was given.
    pub percent: bool,
    /// `WITH TIES` was given.
    pub with_ties: bool,
}

/// A table (or view) reference, or a derived table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableName {
    /// The name, dotted parts joined (`db.dbo.Orders`). Empty for a
    /// derived table.
    pub name: String,
    /// `( SELECT ... )` of a derived table, parentheses included, unparsed.
    pub derived: Option<Expression>,
    /// `AS` was written before the alias.
    pub as_keyword: bool,
    /// Alias.
    pub alias: Option<String>,
    /// `WITH ( ... )` table hints, unparsed.
    pub hints: Option<Expression>,
}

impl TableName {
    /// Creates a table reference without alias or hints.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            derived: None,
            as_keyword: false,
            alias: None,
            hints: None,
        }
    }

    /// Creates a derived table reference from its parenthesized query.
    #[must_use]
    pub fn derived(query: Expression) -> Self {
        Self {
            derived: Some(query),
            ..Self::new(String::new())
        }
    }

    /// Returns true for a `( SELECT ... )` source.
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        self.derived.is_some()
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinType {
    /// `JOIN` or `INNER JOIN`.
    Inner,
    /// `LEFT JOIN`.
    Left,
    /// `RIGHT JOIN`.
    Right,
    /// `FULL JOIN`.
    Full,
    /// `CROSS JOIN`.
    Cross,
    /// `LEFT OUTER JOIN`.
    LeftOuter,
    /// `RIGHT OUTER JOIN`.
    RightOuter,
    /// `FULL OUTER JOIN`.
    FullOuter,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Join {
    /// The type of join.
    pub join_type: JoinType,
    /// The joined table.
    pub right_table: TableName,
    /// The words after `ON`, unparsed. `None` for `CROSS JOIN`.
    pub condition: Option<Expression>,
}

/// A FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FromClause {
    /// The first table source.
    pub table: TableName,
    /// Joins, in source order.
    pub joins: Vec<Join>,
}

/// A parsed SELECT statement.
///
/// Clauses after FROM are kept as flat word runs; their inner structure is
/// not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectQuery {
    /// ALL / DISTINCT.
    pub distinct: Option<DistinctType>,
    /// TOP clause.
    pub top: Option<TopClause>,
    /// Select list, one expression per comma-separated item.
    pub columns: Vec<Expression>,
    /// INTO target.
    pub into: Option<String>,
    /// FROM clause.
    pub from: Option<FromClause>,
    /// WHERE condition.
    pub where_clause: Option<Expression>,
    /// GROUP BY list.
    pub group_by: Option<Expression>,
    /// HAVING condition.
    pub having: Option<Expression>,
    /// ORDER BY list.
    pub order_by: Option<Expression>,
    /// OPTION query hints.
    pub options: Option<Expression>,
    /// Word stream indices from `SELECT` to where parsing stopped.
    pub range: Range<usize>,
}
