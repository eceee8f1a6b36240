//! Default-connection registry.
//!
//! Call sites that used to reach a connection through process-global state
//! construct a [`ConnectionRegistry`] at startup instead and pass it to
//! command creation. The registry is plain data; sharing it across threads
//! is the caller's concern (an `Arc` is enough, since it is immutable after
//! startup).

use docql_core::{Connection, ConnectionProvider, Error, Result};

/// Holds the default connection handed out when command creation is called
/// without an explicit one.
#[derive(Debug, Default)]
pub struct ConnectionRegistry<C: Connection> {
    default: Option<C>,
}

impl<C: Connection> ConnectionRegistry<C> {
    /// Creates an empty registry; resolving a default will fail until one
    /// is registered.
    pub fn new() -> Self {
        ConnectionRegistry { default: None }
    }

    /// Creates a registry with its default connection already set.
    pub fn with_default(conn: C) -> Self {
        ConnectionRegistry {
            default: Some(conn),
        }
    }

    /// Registers the default connection, replacing any prior one.
    pub fn register_default(&mut self, conn: C) {
        self.default = Some(conn);
    }

    /// True when a default connection is registered.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

impl<C: Connection> ConnectionProvider for ConnectionRegistry<C> {
    type Conn = C;

    fn default_connection(&self) -> Result<&C> {
        self.default.as_ref().ok_or_else(|| {
            Error::Configuration("no default connection registered".to_string())
        })
    }
}
