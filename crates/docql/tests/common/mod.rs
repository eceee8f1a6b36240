//! Shared fake driver for integration tests.
//!
//! Implements the connection boundary with no transport: commands record
//! what was bound onto them so tests can assert on the result of command
//! creation.

use docql::{Command, CompiledQuery, Connection, N1qlCompiler, Value};

/// A command that records its compiled text, parameters, and target.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeCommand {
    pub text: String,
    pub params: Vec<Value>,
    pub collection: Option<String>,
}

impl Command for FakeCommand {
    fn set_target_collection(mut self, name: &str) -> Self {
        self.collection = Some(name.to_string());
        self
    }
}

/// A connection that compiles with the N1QL dialect and never executes.
#[derive(Debug, Default)]
pub struct FakeConnection {
    compiler: N1qlCompiler,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for FakeConnection {
    type Compiler = N1qlCompiler;
    type Command = FakeCommand;

    fn compiler(&self) -> &N1qlCompiler {
        &self.compiler
    }

    fn create_command(&self, compiled: CompiledQuery) -> FakeCommand {
        FakeCommand {
            text: compiled.text,
            params: compiled.params,
            collection: None,
        }
    }
}
