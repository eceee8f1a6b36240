//! Query model module
//!
//! The structured, fluent representation of a document-store query.

/// Relational clause types (projection, source, ordering)
#[allow(missing_docs)]
pub mod clauses;
/// Condition expression tree
#[allow(missing_docs)]
pub mod expr;
/// The query specification and fluent builder
#[allow(missing_docs)]
pub mod spec;

// Re-export main types
pub use clauses::{OrderByColumn, OrderDirection, SelectColumn, Source};
pub use expr::{CmpOp, Expr, LogicalOp};
pub use spec::{
    BaseQuery, Combinator, IndexHint, KeyExpr, KeyLookup, Operand, QuerySpec, SetOperator,
};
