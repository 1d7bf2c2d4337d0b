//! Interpreter configuration.

use std::path::PathBuf;

use crate::Output;

/// How an [`Interpreter`](crate::Interpreter) finds and runs modules.
#[derive(Debug, Default)]
pub struct InterpreterConfig {
    /// Repositories searched for top-level modules, in order.
    pub search_path: Vec<PathBuf>,
    /// Module run as `__main__`.
    pub entry_point: Option<String>,
    /// Sink for `Print` instructions.
    pub output: Output,
}

impl InterpreterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a repository to the search path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_path.push(path.into());
        self
    }

    #[must_use]
    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Capture printed lines instead of writing them to stdout.
    #[must_use]
    pub fn capture_output(self) -> Self {
        self.with_output(Output::buffer())
    }
}
