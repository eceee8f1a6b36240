//! Relational clause types shared by every query.
//!
//! These are the clauses any SELECT-shaped query carries (projection,
//! source, ordering); the document-store-specific clauses live in
//! [`spec`](super::spec).

use std::fmt;

use serde::{Deserialize, Serialize};

/// FROM clause: the collection(s) the query reads from.
///
/// A query may name several collections, but command creation always binds
/// a single primary target; for [`Source::Many`] that is the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// A single collection
    Single(String),
    /// An ordered list of collections; the first is the primary target
    Many(Vec<String>),
}

impl Source {
    /// The primary target collection, or `None` for an empty list.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Source::Single(name) => Some(name),
            Source::Many(names) => names.first().map(String::as_str),
        }
    }

    /// All named collections, in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Source::Single(name) => vec![name.as_str()],
            Source::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Source {
    fn from(name: &str) -> Self {
        Source::Single(name.to_string())
    }
}

impl From<String> for Source {
    fn from(name: String) -> Self {
        Source::Single(name)
    }
}

impl From<Vec<String>> for Source {
    fn from(names: Vec<String>) -> Self {
        Source::Many(names)
    }
}

impl From<Vec<&str>> for Source {
    fn from(names: Vec<&str>) -> Self {
        Source::Many(names.into_iter().map(String::from).collect())
    }
}

/// A column in the SELECT projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectColumn {
    /// SELECT * - the whole document
    Wildcard,
    /// SELECT field or SELECT field AS alias
    Field {
        name: String,
        alias: Option<String>,
    },
    /// Verbatim projection expression, emitted as-is
    Raw(String),
}

impl SelectColumn {
    /// A plain field projection.
    pub fn field(name: impl Into<String>) -> Self {
        SelectColumn::Field {
            name: name.into(),
            alias: None,
        }
    }

    /// A field projection with an alias.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectColumn::Field {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for SelectColumn {
    fn from(name: &str) -> Self {
        if name == "*" {
            SelectColumn::Wildcard
        } else {
            SelectColumn::field(name)
        }
    }
}

/// A sort key in ORDER BY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderByColumn {
    pub field: String,
    pub direction: OrderDirection,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}
