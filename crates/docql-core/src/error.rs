//! Error types for docql.

use std::fmt;

/// The main error type for docql operations.
#[derive(Debug)]
pub enum Error {
    /// No connection could be resolved for command creation
    Configuration(String),

    /// The compiler rejected the query specification
    Compilation(String),

    /// A query-building call violated the builder contract
    InvalidQuery(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Compilation(msg) => write!(f, "Compilation error: {}", msg),
            Error::InvalidQuery(msg) => write!(f, "Invalid query: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for docql operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = Error::Configuration("no default connection registered".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: no default connection registered"
        );

        let err = Error::InvalidQuery("USE KEYS requires at least one key".to_string());
        assert!(err.to_string().starts_with("Invalid query: "));
    }
}
