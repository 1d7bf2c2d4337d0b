//! Code objects: the executable unit stored in an artifact.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A literal value an instruction can bind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Constant::Bool(value)
    }
}

impl From<i64> for Constant {
    fn from(value: i64) -> Self {
        Constant::Int(value)
    }
}

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Constant::Str(value.to_string())
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Constant::Str(value)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::None => write!(f, "None"),
            Constant::Bool(true) => write!(f, "True"),
            Constant::Bool(false) => write!(f, "False"),
            Constant::Int(n) => write!(f, "{n}"),
            Constant::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// One step of a module body.
///
/// Module bodies are straight-line: every instruction runs once, in order,
/// against the module being initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Bind `name` in the module to a constant.
    Store { name: String, value: Constant },
    /// Import a fully qualified module through the host import system.
    ///
    /// Without `bind`, the first dotted segment is bound to the top-level
    /// package. With `bind`, the imported module itself is bound to it.
    Import {
        module: String,
        bind: Option<String>,
    },
    /// Copy the module attribute `source` into `target`.
    Alias { target: String, source: String },
    /// Write one line to the host's output.
    Print { text: String },
    /// Abort the module body with an error.
    Raise { message: String },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Store { name, value } => write!(f, "STORE      {name} = {value}"),
            Instruction::Import { module, bind: None } => write!(f, "IMPORT     {module}"),
            Instruction::Import {
                module,
                bind: Some(bind),
            } => write!(f, "IMPORT     {module} as {bind}"),
            Instruction::Alias { target, source } => write!(f, "ALIAS      {target} = {source}"),
            Instruction::Print { text } => write!(f, "PRINT      {text:?}"),
            Instruction::Raise { message } => write!(f, "RAISE      {message:?}"),
        }
    }
}

/// A compiled module body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeObject {
    /// Name the body was compiled for (informational).
    pub name: String,
    /// Source file the body was compiled from (informational).
    pub filename: String,
    pub instructions: Vec<Instruction>,
}

impl CodeObject {
    /// Create an empty body. Executing it has no effects.
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        CodeObject {
            name: name.into(),
            filename: filename.into(),
            instructions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    #[must_use]
    pub fn store(self, name: impl Into<String>, value: impl Into<Constant>) -> Self {
        self.with(Instruction::Store {
            name: name.into(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn import(self, module: impl Into<String>) -> Self {
        self.with(Instruction::Import {
            module: module.into(),
            bind: None,
        })
    }

    #[must_use]
    pub fn import_as(self, module: impl Into<String>, bind: impl Into<String>) -> Self {
        self.with(Instruction::Import {
            module: module.into(),
            bind: Some(bind.into()),
        })
    }

    #[must_use]
    pub fn alias(self, target: impl Into<String>, source: impl Into<String>) -> Self {
        self.with(Instruction::Alias {
            target: target.into(),
            source: source.into(),
        })
    }

    #[must_use]
    pub fn print(self, text: impl Into<String>) -> Self {
        self.with(Instruction::Print { text: text.into() })
    }

    #[must_use]
    pub fn raise(self, message: impl Into<String>) -> Self {
        self.with(Instruction::Raise {
            message: message.into(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Disassembly listing, one instruction per line.
impl fmt::Display for CodeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "code object {:?} from {:?} ({} instructions)",
            self.name,
            self.filename,
            self.instructions.len()
        )?;
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{index:>4} {instruction}")?;
        }
        Ok(())
    }
}
