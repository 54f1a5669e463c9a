//! Abstract Syntax Tree (AST) types for SELECT statements.

mod expression;
mod select;

pub use expression::Expression;
pub use select::{DistinctType, FromClause, Join, JoinType, SelectQuery, TableName, TopClause};
