//! The query specification model and its fluent builder.
//!
//! A [`QuerySpec`] is the in-memory description of a document-store query:
//! the relational clauses any SELECT carries, plus the document-store
//! extensions that have no relational equivalent (USE KEYS, USE INDEX, and
//! chained set combinators). Building one performs no I/O; the
//! specification is handed to a compiler at command-creation time and
//! stays reusable afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::clauses::{OrderByColumn, OrderDirection, SelectColumn, Source};
use crate::query::expr::Expr;

/// The generic relational clause set embedded in every [`QuerySpec`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseQuery {
    /// SELECT projection; empty means `*`
    pub select: Vec<SelectColumn>,
    /// SELECT DISTINCT
    pub distinct: bool,
    /// FROM clause
    pub from: Option<Source>,
    /// WHERE condition
    pub filter: Option<Expr>,
    /// ORDER BY keys, in order
    pub order_by: Vec<OrderByColumn>,
    /// LIMIT row count
    pub limit: Option<u64>,
    /// OFFSET row count
    pub offset: Option<u64>,
}

/// The key expression of a USE KEYS clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyExpr {
    /// A single document key
    Single(String),
    /// A list of document keys
    List(Vec<String>),
    /// A sub-query producing the keys
    SubQuery(Box<QuerySpec>),
}

impl KeyExpr {
    /// True when the expression can address no document at all.
    pub fn is_empty(&self) -> bool {
        match self {
            KeyExpr::Single(key) => key.is_empty(),
            KeyExpr::List(keys) => keys.is_empty(),
            KeyExpr::SubQuery(_) => false,
        }
    }
}

impl From<&str> for KeyExpr {
    fn from(key: &str) -> Self {
        KeyExpr::Single(key.to_string())
    }
}

impl From<String> for KeyExpr {
    fn from(key: String) -> Self {
        KeyExpr::Single(key)
    }
}

impl From<Vec<String>> for KeyExpr {
    fn from(keys: Vec<String>) -> Self {
        KeyExpr::List(keys)
    }
}

impl From<Vec<&str>> for KeyExpr {
    fn from(keys: Vec<&str>) -> Self {
        KeyExpr::List(keys.into_iter().map(String::from).collect())
    }
}

impl From<QuerySpec> for KeyExpr {
    fn from(query: QuerySpec) -> Self {
        KeyExpr::SubQuery(Box::new(query))
    }
}

/// USE [PRIMARY] KEYS directive: restrict the query to directly addressed
/// documents instead of a predicate scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLookup {
    /// The key expression; never empty
    pub keys: KeyExpr,
    /// Resolve against the primary key index
    pub use_primary: bool,
}

/// USE INDEX directive: force the planner onto a named index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexHint {
    /// Index name; never empty
    pub index: String,
    /// Optional index-kind qualifier, e.g. `"GSI"` or `"VIEW"`
    pub using: Option<String>,
}

/// Set-combination operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOperator::Union => write!(f, "UNION"),
            SetOperator::Intersect => write!(f, "INTERSECT"),
            SetOperator::Except => write!(f, "EXCEPT"),
        }
    }
}

/// The right-hand side of a set combinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Literal query text, emitted verbatim
    Raw(String),
    /// A nested specification, compiled recursively
    Query(Box<QuerySpec>),
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Raw(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Raw(text)
    }
}

impl From<QuerySpec> for Operand {
    fn from(query: QuerySpec) -> Self {
        Operand::Query(Box::new(query))
    }
}

/// One step of a set-combination chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combinator {
    pub operator: SetOperator,
    pub operand: Operand,
    /// `true` selects the ALL variant (duplicates preserved)
    pub all: bool,
}

/// A document-store query specification.
///
/// Built fluently; every builder method consumes and returns the
/// specification so calls chain. Fallible methods return [`Result`] and
/// reject contract
/// violations at the call site instead of deferring them to compile time.
///
/// ```
/// use docql_core::{Expr, QuerySpec};
///
/// let query = QuerySpec::new()
///     .from("orders")
///     .filter(Expr::field("status").eq("open"))
///     .use_index("orders_by_status", Some("GSI"))?
///     .limit(20);
/// # Ok::<(), docql_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// The generic relational clauses
    pub base: BaseQuery,
    /// USE [PRIMARY] KEYS directive; last write wins
    pub key_lookup: Option<KeyLookup>,
    /// USE INDEX directive; last write wins
    pub index_hint: Option<IndexHint>,
    /// Set-combination chain, applied left-to-right in insertion order
    pub combinators: Vec<Combinator>,
}

impl QuerySpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    // Relational clause mutators, forwarded onto the embedded base.

    /// Replaces the SELECT projection.
    pub fn select<C: Into<SelectColumn>>(mut self, columns: Vec<C>) -> Self {
        self.base.select = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the projection DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.base.distinct = true;
        self
    }

    /// Sets the FROM clause.
    pub fn from(mut self, source: impl Into<Source>) -> Self {
        self.base.from = Some(source.into());
        self
    }

    /// Sets the WHERE condition; repeated calls AND-merge.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.base.filter = Some(match self.base.filter.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    /// OR-merges a condition into the WHERE clause.
    pub fn or_filter(mut self, condition: Expr) -> Self {
        self.base.filter = Some(match self.base.filter.take() {
            Some(existing) => existing.or(condition),
            None => condition,
        });
        self
    }

    /// Appends an ORDER BY key.
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.base.order_by.push(OrderByColumn {
            field: field.into(),
            direction,
        });
        self
    }

    /// Sets the LIMIT clause.
    pub fn limit(mut self, count: u64) -> Self {
        self.base.limit = Some(count);
        self
    }

    /// Sets the OFFSET clause.
    pub fn offset(mut self, count: u64) -> Self {
        self.base.offset = Some(count);
        self
    }

    // Document-store directives.

    /// Sets the USE KEYS part of the query, replacing any prior directive.
    ///
    /// `primary` selects USE PRIMARY KEYS, resolving the expression against
    /// the primary key index. Rejects an empty key expression here rather
    /// than at compile time.
    pub fn use_keys(mut self, keys: impl Into<KeyExpr>, primary: bool) -> Result<Self> {
        let keys = keys.into();
        if keys.is_empty() {
            return Err(Error::InvalidQuery(
                "USE KEYS requires at least one key".to_string(),
            ));
        }
        self.key_lookup = Some(KeyLookup {
            keys,
            use_primary: primary,
        });
        Ok(self)
    }

    /// Sets the USE INDEX part of the query, replacing any prior hint.
    ///
    /// `using` optionally names the index kind (`"GSI"` / `"VIEW"`).
    pub fn use_index(mut self, index: impl Into<String>, using: Option<&str>) -> Result<Self> {
        let index = index.into();
        if index.is_empty() {
            return Err(Error::InvalidQuery(
                "USE INDEX requires a non-empty index name".to_string(),
            ));
        }
        self.index_hint = Some(IndexHint {
            index,
            using: using.map(String::from),
        });
        Ok(self)
    }

    // Set combinators. Each call appends one step; the chain is applied
    // left-to-right at compile time and never deduplicated.

    /// Appends a UNION step.
    pub fn union(self, operand: impl Into<Operand>) -> Self {
        self.combine(SetOperator::Union, operand, false)
    }

    /// Appends a UNION ALL step.
    pub fn union_all(self, operand: impl Into<Operand>) -> Self {
        self.combine(SetOperator::Union, operand, true)
    }

    /// Appends an INTERSECT step.
    pub fn intersect(self, operand: impl Into<Operand>) -> Self {
        self.combine(SetOperator::Intersect, operand, false)
    }

    /// Appends an INTERSECT ALL step.
    pub fn intersect_all(self, operand: impl Into<Operand>) -> Self {
        self.combine(SetOperator::Intersect, operand, true)
    }

    /// Appends an EXCEPT step.
    pub fn except(self, operand: impl Into<Operand>) -> Self {
        self.combine(SetOperator::Except, operand, false)
    }

    /// Appends an EXCEPT ALL step.
    pub fn except_all(self, operand: impl Into<Operand>) -> Self {
        self.combine(SetOperator::Except, operand, true)
    }

    /// Appends an arbitrary set-combination step.
    pub fn combine(mut self, operator: SetOperator, operand: impl Into<Operand>, all: bool) -> Self {
        self.combinators.push(Combinator {
            operator,
            operand: operand.into(),
            all,
        });
        self
    }

    /// The primary target collection, when the FROM clause resolves one.
    pub fn primary_source(&self) -> Option<&str> {
        self.base.from.as_ref().and_then(Source::primary)
    }
}
