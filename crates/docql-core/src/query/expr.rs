//! Condition expression tree for WHERE clauses.
//!
//! Expressions are built with typed constructors instead of raw condition
//! strings, so malformed predicates are unrepresentable. `Expr::raw` remains
//! as an escape hatch for dialect features the tree does not model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Boolean expression for WHERE clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Document field reference
    Field(String),
    /// Literal value
    Literal(Value),
    /// Binary comparison: field = value, field > value, etc.
    Cmp {
        left: Box<Expr>,
        op: CmpOp,
        right: Box<Expr>,
    },
    /// Logical AND/OR
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// NOT expression
    Not(Box<Expr>),
    /// LIKE pattern matching
    Like { expr: Box<Expr>, pattern: String },
    /// IN (value1, value2, ...)
    In { expr: Box<Expr>, values: Vec<Value> },
    /// BETWEEN low AND high
    Between {
        expr: Box<Expr>,
        low: Value,
        high: Value,
    },
    /// Verbatim dialect text, emitted as-is by the compiler
    Raw(String),
}

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq, // =
    Ne, // !=
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl Expr {
    /// Reference a document field.
    pub fn field(name: impl Into<String>) -> Self {
        Expr::Field(name.into())
    }

    /// Wrap a literal value.
    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    /// Verbatim condition text, passed through to the compiler unchanged.
    pub fn raw(text: impl Into<String>) -> Self {
        Expr::Raw(text.into())
    }

    /// `self = value`
    pub fn eq(self, value: impl Into<Value>) -> Self {
        self.cmp(CmpOp::Eq, value)
    }

    /// `self != value`
    pub fn ne(self, value: impl Into<Value>) -> Self {
        self.cmp(CmpOp::Ne, value)
    }

    /// `self < value`
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.cmp(CmpOp::Lt, value)
    }

    /// `self <= value`
    pub fn le(self, value: impl Into<Value>) -> Self {
        self.cmp(CmpOp::Le, value)
    }

    /// `self > value`
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.cmp(CmpOp::Gt, value)
    }

    /// `self >= value`
    pub fn ge(self, value: impl Into<Value>) -> Self {
        self.cmp(CmpOp::Ge, value)
    }

    /// `self AND other`
    pub fn and(self, other: Expr) -> Self {
        Expr::Logical {
            left: Box::new(self),
            op: LogicalOp::And,
            right: Box::new(other),
        }
    }

    /// `self OR other`
    pub fn or(self, other: Expr) -> Self {
        Expr::Logical {
            left: Box::new(self),
            op: LogicalOp::Or,
            right: Box::new(other),
        }
    }

    /// `NOT self`
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// `self LIKE pattern`
    pub fn like(self, pattern: impl Into<String>) -> Self {
        Expr::Like {
            expr: Box::new(self),
            pattern: pattern.into(),
        }
    }

    /// `self IN (values...)`
    pub fn in_list<V: Into<Value>>(self, values: Vec<V>) -> Self {
        Expr::In {
            expr: Box::new(self),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `self BETWEEN low AND high`
    pub fn between(self, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Expr::Between {
            expr: Box::new(self),
            low: low.into(),
            high: high.into(),
        }
    }

    fn cmp(self, op: CmpOp, value: impl Into<Value>) -> Self {
        Expr::Cmp {
            left: Box::new(self),
            op,
            right: Box::new(Expr::Literal(value.into())),
        }
    }
}

// Display implementations for debugging and error messages

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmpOp::Eq => write!(f, "="),
            CmpOp::Ne => write!(f, "!="),
            CmpOp::Lt => write!(f, "<"),
            CmpOp::Le => write!(f, "<="),
            CmpOp::Gt => write!(f, ">"),
            CmpOp::Ge => write!(f, ">="),
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Field(name) => write!(f, "{}", name),
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Cmp { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Expr::Logical { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Not(inner) => write!(f, "NOT ({})", inner),
            Expr::Like { expr, pattern } => write!(f, "{} LIKE \"{}\"", expr, pattern),
            Expr::In { expr, values } => {
                write!(f, "{} IN (", expr)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
            Expr::Between { expr, low, high } => {
                write!(f, "{} BETWEEN {} AND {}", expr, low, high)
            }
            Expr::Raw(text) => write!(f, "{}", text),
        }
    }
}
