//! Token types for the T-SQL scanner.

use core::fmt;

/// Lowest operator precedence, also returned for non-operators.
pub const LOWEST_PRECEDENCE: u8 = 0;

/// Highest operator precedence.
pub const HIGHEST_PRECEDENCE: u8 = 7;

/// The lexical categories of T-SQL.
///
/// Variants are laid out in four contiguous bands (special, literals,
/// keywords, operators) so that band membership is a range check on the
/// discriminant. New variants must be added inside their band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Token {
    // Special
    /// End of input.
    Eof,
    /// A byte that starts no token, or an unterminated construct.
    Illegal,
    /// `-- ...` or `/* ... */`
    Comment,

    // Literals
    /// Identifier, plain (`ColName`, `#tmp`, `@var`) or delimited (`[x]`, `"x"`).
    Ident,
    /// Integer literal (e.g., 42)
    Int,
    /// Number literal containing a decimal point (e.g., 123.12)
    Float,
    /// String literal including its quotes (e.g., 'Value')
    String,

    // Keywords
    Select,
    Distinct,
    Top,
    Percent,
    Ties,
    As,
    From,
    Where,
    /// GROUP BY
    GroupBy,
    /// ORDER BY
    OrderBy,
    /// PARTITION BY
    PartitionBy,
    /// FORCE ORDER
    ForceOrder,
    Join,
    On,
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Outer,
    Having,
    Into,
    Case,
    When,
    Then,
    Else,
    End,
    Cube,
    Rollup,
    Update,
    Delete,
    Insert,
    Truncate,
    Go,
    With,
    Option,
    Union,
    Except,
    Intersect,
    Is,
    Null,
    Exists,

    // Aggregate functions
    Sum,
    Avg,
    Count,
    CountBig,
    Min,
    Max,
    Stdev,
    Stdevp,
    Var,
    Varp,
    StringAgg,
    ChecksumAgg,
    Grouping,
    GroupingId,
    ApproxCountDistinct,
    Recompile,

    // Logical and comparison keywords
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Any,
    All,
    Some,

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Modulo,
    /// Assignment `=`. The scanner cannot tell assignment from comparison
    /// and always yields [`Token::Eq`]; callers reclassify when they can.
    Assign,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    LtEq,
    /// >=
    GtEq,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// ~
    BitNot,

    // Delimiters
    /// (
    LParen,
    /// )
    RParen,
    /// [
    LBracket,
    /// ]
    RBracket,
    /// {
    LBrace,
    /// }
    RBrace,
    /// ,
    Comma,
    /// .
    Period,
    /// ;
    Semicolon,
}

/// T-SQL reserved words and table hints, upper case, sorted.
const RESERVED_WORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUTHORIZATION", "AVG", "BACKUP",
    "BEGIN", "BETWEEN", "BREAK", "BROWSE", "BULK", "BY", "CASCADE", "CASE", "CHECK",
    "CHECKPOINT", "CLOSE", "CLUSTERED", "COALESCE", "COLLATE", "COLUMN", "COMMIT", "COMPUTE",
    "CONSTRAINT", "CONTAINS", "CONTAINSTABLE", "CONTINUE", "CONVERT", "COUNT", "CREATE",
    "CROSS", "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURSOR", "DATABASE", "DBCC", "DEALLOCATE", "DECLARE", "DEFAULT", "DELETE", "DENY", "DESC",
    "DISK", "DISTINCT", "DISTRIBUTED", "DOUBLE", "DROP", "DUMP", "ELSE", "END", "ERRLVL",
    "ESCAPE", "EXCEPT", "EXEC", "EXECUTE", "EXISTS", "EXIT", "EXTERNAL", "FETCH", "FILE",
    "FILLFACTOR", "FOR", "FORCESCAN", "FORCESEEK", "FOREIGN", "FREETEXT", "FREETEXTTABLE",
    "FROM", "FULL", "FUNCTION", "GOTO", "GRANT", "GROUP", "HAVING", "HOLDLOCK", "IDENTITY",
    "IDENTITYCOL", "IDENTITY_INSERT", "IF", "IN", "INDEX", "INNER", "INSERT", "INTERSECT",
    "INTO", "IS", "JOIN", "KEY", "KILL", "LEFT", "LIKE", "LINENO", "LOAD", "MAX", "MERGE",
    "MIN", "NATIONAL", "NOCHECK", "NOLOCK", "NONCLUSTERED", "NOT", "NOWAIT", "NULL", "NULLIF",
    "OF", "OFF", "OFFSETS", "ON", "OPEN", "OPENDATASOURCE", "OPENQUERY", "OPENROWSET",
    "OPENXML", "OPTION", "OR", "ORDER", "OUTER", "OVER", "PAGLOCK", "PARTITION", "PERCENT",
    "PIVOT", "PLAN", "PRECISION", "PRIMARY", "PRINT", "PROC", "PROCEDURE", "PUBLIC",
    "RAISERROR", "READ", "READCOMMITTED", "READPAST", "READTEXT", "READUNCOMMITTED",
    "RECOMPILE", "RECONFIGURE", "REFERENCES", "REPEATABLEREAD", "REPLICATION", "RESTORE",
    "RESTRICT", "RETURN", "REVERT", "REVOKE", "RIGHT", "ROLLBACK", "ROWCOUNT", "ROWGUIDCOL",
    "ROWLOCK", "RULE", "SAVE", "SCHEMA", "SECURITYAUDIT", "SELECT", "SEMANTICKEYPHRASETABLE",
    "SEMANTICSIMILARITYDETAILSTABLE", "SEMANTICSIMILARITYTABLE", "SERIALIZABLE",
    "SESSION_USER", "SET", "SETUSER", "SHUTDOWN", "SOME", "STATISTICS", "SUM", "SYSTEM_USER",
    "TABLE", "TABLESAMPLE", "TABLOCK", "TABLOCKX", "TEXTSIZE", "THEN", "TO", "TOP", "TRAN",
    "TRANSACTION", "TRIGGER", "TRUNCATE", "TRY_CONVERT", "TSEQUAL", "UNION", "UNIQUE",
    "UNPIVOT", "UPDATE", "UPDATETEXT", "UPDLOCK", "USE", "USER", "VALUES", "VARYING", "VIEW",
    "WAITFOR", "WHEN", "WHERE", "WHILE", "WITH", "WRITETEXT", "XLOCK",
];

const fn in_band(t: Token, first: Token, last: Token) -> bool {
    let t = t as u8;
    t >= first as u8 && t <= last as u8
}

impl Token {
    /// Returns true for identifiers, numbers and strings.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        in_band(self, Self::Ident, Self::String)
    }

    /// Returns true for keywords, aggregate function names included.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        in_band(self, Self::Select, Self::Some)
    }

    /// Returns true for operators and punctuation.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        in_band(self, Self::Plus, Self::Semicolon)
    }

    /// Returns true for aggregate function names.
    #[must_use]
    pub const fn is_aggregate(self) -> bool {
        in_band(self, Self::Sum, Self::Recompile)
    }

    /// Returns true for keywords that can start a join.
    #[must_use]
    pub const fn is_join_start(self) -> bool {
        matches!(
            self,
            Self::Join | Self::Inner | Self::Left | Self::Right | Self::Full | Self::Cross
        )
    }

    /// Returns the operator precedence, 1 binding loosest.
    ///
    /// Non-operators get [`LOWEST_PRECEDENCE`].
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Assign => 1,
            Self::All
            | Self::Any
            | Self::Between
            | Self::In
            | Self::Like
            | Self::Or
            | Self::Some => 2,
            Self::And => 3,
            Self::Not => 4,
            Self::Eq | Self::Lt | Self::Gt | Self::LtEq | Self::GtEq | Self::NotEq => 5,
            Self::Plus | Self::Minus => 6,
            Self::Star | Self::Slash | Self::Modulo => HIGHEST_PRECEDENCE,
            _ => LOWEST_PRECEDENCE,
        }
    }

    /// Looks up a keyword by spelling (case-insensitive).
    ///
    /// Multi-word keywords are matched only in their single-space form
    /// (`"GROUP BY"`); the scanner assembles that form. Aggregate function
    /// names are not keywords here, see [`Token::lookup_aggregate`].
    /// Anything else is [`Token::Ident`].
    #[must_use]
    pub fn lookup_keyword(ident: &str) -> Self {
        match ident.to_ascii_uppercase().as_str() {
            "SELECT" => Self::Select,
            "DISTINCT" => Self::Distinct,
            "TOP" => Self::Top,
            "PERCENT" => Self::Percent,
            "TIES" => Self::Ties,
            "AS" => Self::As,
            "FROM" => Self::From,
            "WHERE" => Self::Where,
            "GROUP BY" => Self::GroupBy,
            "ORDER BY" => Self::OrderBy,
            "PARTITION BY" => Self::PartitionBy,
            "FORCE ORDER" => Self::ForceOrder,
            "JOIN" => Self::Join,
            "ON" => Self::On,
            "INNER" => Self::Inner,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "FULL" => Self::Full,
            "CROSS" => Self::Cross,
            "OUTER" => Self::Outer,
            "HAVING" => Self::Having,
            "INTO" => Self::Into,
            "CASE" => Self::Case,
            "WHEN" => Self::When,
            "THEN" => Self::Then,
            "ELSE" => Self::Else,
            "END" => Self::End,
            "CUBE" => Self::Cube,
            "ROLLUP" => Self::Rollup,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            "INSERT" => Self::Insert,
            "TRUNCATE" => Self::Truncate,
            "GO" => Self::Go,
            "WITH" => Self::With,
            "OPTION" => Self::Option,
            "UNION" => Self::Union,
            "EXCEPT" => Self::Except,
            "INTERSECT" => Self::Intersect,
            "IS" => Self::Is,
            "NULL" => Self::Null,
            "EXISTS" => Self::Exists,
            "AND" => Self::And,
            "OR" => Self::Or,
            "NOT" => Self::Not,
            "IN" => Self::In,
            "BETWEEN" => Self::Between,
            "LIKE" => Self::Like,
            "ANY" => Self::Any,
            "ALL" => Self::All,
            "SOME" => Self::Some,
            _ => Self::Ident,
        }
    }

    /// Looks up an aggregate function name (case-insensitive).
    #[must_use]
    pub fn lookup_aggregate(ident: &str) -> Self {
        match ident.to_ascii_uppercase().as_str() {
            "SUM" => Self::Sum,
            "AVG" => Self::Avg,
            "COUNT" => Self::Count,
            "COUNT_BIG" => Self::CountBig,
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "STDEV" => Self::Stdev,
            "STDEVP" => Self::Stdevp,
            "VAR" => Self::Var,
            "VARP" => Self::Varp,
            "STRING_AGG" => Self::StringAgg,
            "CHECKSUM_AGG" => Self::ChecksumAgg,
            "GROUPING" => Self::Grouping,
            "GROUPING_ID" => Self::GroupingId,
            "APPROX_COUNT_DISTINCT" => Self::ApproxCountDistinct,
            "RECOMPILE" => Self::Recompile,
            _ => Self::Ident,
        }
    }

    /// Returns true if `ident` is a T-SQL reserved word or table hint
    /// (case-insensitive). Covers words the scanner leaves as
    /// [`Token::Ident`], such as `DESC`, `DECLARE` or `NOLOCK`, as well as
    /// most single-word keywords.
    #[must_use]
    pub fn is_reserved_word(ident: &str) -> bool {
        RESERVED_WORDS
            .binary_search(&ident.to_ascii_uppercase().as_str())
            .is_ok()
    }

    /// Returns how many more words complete a multi-word keyword starting
    /// with `ident`, or `None` if `ident` heads no multi-word keyword.
    #[must_use]
    pub fn multiword_head(ident: &str) -> Option<usize> {
        match ident.to_ascii_uppercase().as_str() {
            "GROUP" | "ORDER" | "PARTITION" | "FORCE" => Some(1),
            _ => None,
        }
    }

    /// Returns the canonical spelling of the token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Comment => "COMMENT",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Select => "SELECT",
            Self::Distinct => "DISTINCT",
            Self::Top => "TOP",
            Self::Percent => "PERCENT",
            Self::Ties => "TIES",
            Self::As => "AS",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::OrderBy => "ORDER BY",
            Self::PartitionBy => "PARTITION BY",
            Self::ForceOrder => "FORCE ORDER",
            Self::Join => "JOIN",
            Self::On => "ON",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Cross => "CROSS",
            Self::Outer => "OUTER",
            Self::Having => "HAVING",
            Self::Into => "INTO",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cube => "CUBE",
            Self::Rollup => "ROLLUP",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Insert => "INSERT",
            Self::Truncate => "TRUNCATE",
            Self::Go => "GO",
            Self::With => "WITH",
            Self::Option => "OPTION",
            Self::Union => "UNION",
            Self::Except => "EXCEPT",
            Self::Intersect => "INTERSECT",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::Exists => "EXISTS",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::CountBig => "COUNT_BIG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Stdev => "STDEV",
            Self::Stdevp => "STDEVP",
            Self::Var => "VAR",
            Self::Varp => "VARP",
            Self::StringAgg => "STRING_AGG",
            Self::ChecksumAgg => "CHECKSUM_AGG",
            Self::Grouping => "GROUPING",
            Self::GroupingId => "GROUPING_ID",
            Self::ApproxCountDistinct => "APPROX_COUNT_DISTINCT",
            Self::Recompile => "RECOMPILE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Any => "ANY",
            Self::All => "ALL",
            Self::Some => "SOME",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Modulo => "%",
            Self::Assign | Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitNot => "~",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Period => ".",
            Self::Semicolon => ";",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
