//! # docql
//!
//! A fluent, typed query builder for document stores: relational clauses
//! plus the document-store extensions that have no SQL equivalent —
//! key-based direct lookup (USE KEYS), index hints (USE INDEX), and chained
//! set combinators (UNION/INTERSECT/EXCEPT, with ALL variants).
//!
//! ## Quick Start
//!
//! ```rust
//! use docql::{Expr, N1qlCompiler, QueryCompiler, QuerySpec};
//!
//! let query = QuerySpec::new()
//!     .from("orders")
//!     .filter(Expr::field("status").eq("open"))
//!     .use_keys(vec!["order::1", "order::2"], false)?
//!     .union_all(QuerySpec::new().from("archive"));
//!
//! let compiled = N1qlCompiler::new().compile(&query)?;
//! assert_eq!(
//!     compiled.text,
//!     "SELECT * FROM `orders` USE KEYS $1 WHERE status = $2 \
//!      UNION ALL (SELECT * FROM `archive`)"
//! );
//! # Ok::<(), docql::Error>(())
//! ```
//!
//! ## Running a query
//!
//! Building performs no I/O. A driver implements the [`Connection`],
//! [`QueryCompiler`], and [`Command`] traits; command creation compiles the
//! specification, binds the primary target collection, and hands back an
//! executable command the driver runs later:
//!
//! ```rust,ignore
//! let registry = ConnectionRegistry::with_default(my_connection);
//! let command = query.create_command(None, &registry)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod n1ql;
pub mod registry;

// Re-export the core model
pub use docql_core::{
    BaseQuery, CmpOp, Combinator, Command, CompiledQuery, Connection, ConnectionProvider, Error,
    Expr, IndexHint, KeyExpr, KeyLookup, LogicalOp, Operand, OrderByColumn, OrderDirection,
    QueryCompiler, QuerySpec, Result, SelectColumn, SetOperator, Source, Value,
};

pub use n1ql::N1qlCompiler;
pub use registry::ConnectionRegistry;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
