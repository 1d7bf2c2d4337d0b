//! Output sink for `Print` instructions.
//!
//! Module bodies print through the interpreter rather than straight to
//! stdout so that embedders and tests can capture what a program wrote:
//! - CLI: stdout (default)
//! - Tests: buffer for assertions
//! - Silent: discard, for resolving imports without side effects
//!
//! Enum dispatch, as every `Print` goes through here.

use parking_lot::Mutex;

/// Where printed lines go.
pub enum Output {
    /// Writes each line to stdout.
    Stdout,
    /// Captures lines in memory.
    Buffer(Mutex<Vec<String>>),
    /// Discards everything.
    Silent,
}

impl Output {
    /// A capturing sink with no lines yet.
    pub fn buffer() -> Self {
        Output::Buffer(Mutex::new(Vec::new()))
    }

    /// Emit one line.
    pub fn println(&self, line: &str) {
        match self {
            Output::Stdout => println!("{line}"),
            Output::Buffer(lines) => lines.lock().push(line.to_string()),
            Output::Silent => {}
        }
    }

    /// Lines captured so far.
    ///
    /// Always empty for sinks that don't capture.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Output::Buffer(lines) => lines.lock().clone(),
            Output::Stdout | Output::Silent => Vec::new(),
        }
    }

    /// Drop captured lines.
    pub fn clear(&self) {
        if let Output::Buffer(lines) = self {
            lines.lock().clear();
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Stdout
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Stdout => write!(f, "Output::Stdout"),
            Output::Buffer(lines) => write!(f, "Output::Buffer({} lines)", lines.lock().len()),
            Output::Silent => write!(f, "Output::Silent"),
        }
    }
}
