//! # docql Core
//!
//! Query model, fluent builder, and collaborator contracts for docql.
//!
//! This crate owns the in-memory representation of a document-store query:
//! the relational clauses, the document-store directives (USE KEYS,
//! USE INDEX, set combinators), and the traits a driver implements to turn
//! a specification into an executable command. It performs no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod error;
pub mod query;
pub mod value;

pub use connection::{Command, CompiledQuery, Connection, ConnectionProvider, QueryCompiler};
pub use error::{Error, Result};
pub use query::{
    BaseQuery, CmpOp, Combinator, Expr, IndexHint, KeyExpr, KeyLookup, LogicalOp, Operand,
    OrderByColumn, OrderDirection, QuerySpec, SelectColumn, SetOperator, Source,
};
pub use value::Value;
