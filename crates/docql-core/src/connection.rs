//! The collaborator boundary: compiler, connection, and command contracts.
//!
//! docql owns the query model; everything that touches a real cluster sits
//! behind these traits. A driver crate implements [`Connection`] for its
//! transport, and command creation on [`QuerySpec`] is the only place the
//! core calls across the boundary.

use crate::error::{Error, Result};
use crate::query::spec::QuerySpec;
use crate::value::Value;

/// The output of compiling a [`QuerySpec`]: query text plus the positional
/// parameters extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Dialect query text with `$n` parameter placeholders
    pub text: String,
    /// Positional parameter values, `$1` first
    pub params: Vec<Value>,
}

/// Turns a specification into dialect query text and parameters.
///
/// The compiled text must reproduce the key-lookup directive, the index
/// hint, and the combinator chain faithfully; the core never inspects or
/// rewrites what the compiler produces.
pub trait QueryCompiler {
    /// Compiles `query`, failing with [`Error::Compilation`] when the
    /// specification is structurally invalid for this dialect.
    fn compile(&self, query: &QuerySpec) -> Result<CompiledQuery>;
}

/// An executable unit produced by a connection.
///
/// Binding the target collection is the only mutation the core performs on
/// a command; execution belongs to the driver and happens later.
pub trait Command: Sized {
    /// Binds the primary target collection name (fluent).
    fn set_target_collection(self, name: &str) -> Self;
}

/// A session against a document store.
pub trait Connection {
    /// The compiler for this connection's dialect/version.
    type Compiler: QueryCompiler;
    /// The command type this connection produces.
    type Command: Command;

    /// The compiler bound to this connection.
    fn compiler(&self) -> &Self::Compiler;

    /// Wraps compiled text and parameters into an executable command.
    fn create_command(&self, compiled: CompiledQuery) -> Self::Command;
}

/// Resolves the implicit connection when none is passed to
/// [`QuerySpec::create_command`].
///
/// Replaces the global-registry lookup some frameworks use: the call site
/// constructs a provider (typically once, at startup) and passes it in
/// explicitly, so tests can substitute a fake without touching process
/// state.
pub trait ConnectionProvider {
    /// The connection type this provider hands out.
    type Conn: Connection;

    /// The default connection, or [`Error::Configuration`] when none is
    /// registered.
    fn default_connection(&self) -> Result<&Self::Conn>;
}

impl QuerySpec {
    /// Creates an executable command from this specification.
    ///
    /// An explicit `db` wins; otherwise the provider's default connection
    /// is used. The specification is only read, never mutated: it can be
    /// reused to create further independent commands afterwards.
    ///
    /// Fails with [`Error::Configuration`] when no connection resolves and
    /// propagates [`Error::Compilation`] from the compiler unchanged.
    pub fn create_command<C, P>(&self, db: Option<&C>, provider: &P) -> Result<C::Command>
    where
        C: Connection,
        P: ConnectionProvider<Conn = C>,
    {
        let conn = match db {
            Some(conn) => conn,
            None => provider.default_connection()?,
        };
        self.create_command_with(conn)
    }

    /// Creates an executable command using an explicit connection.
    pub fn create_command_with<C: Connection>(&self, db: &C) -> Result<C::Command> {
        let compiled = db.compiler().compile(self)?;
        let target = self.primary_source().ok_or_else(|| {
            Error::Compilation("query has no source collection".to_string())
        })?;
        tracing::debug!(
            collection = target,
            text = %compiled.text,
            params = compiled.params.len(),
            "created command"
        );
        Ok(db.create_command(compiled).set_target_collection(target))
    }
}
