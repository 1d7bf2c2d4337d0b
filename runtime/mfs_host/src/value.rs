//! Runtime values held in module attribute tables.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use mfs_import::MfsImporter;
use mfs_marshal::Constant;

use crate::ModuleRef;

#[derive(Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    Path(PathBuf),
    List(Vec<Value>),
    Module(ModuleRef),
    Loader(Arc<MfsImporter>),
}

impl Value {
    pub fn as_module(&self) -> Option<&ModuleRef> {
        match self {
            Value::Module(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The paths in a list of paths, e.g. a package's `__path__`.
    pub fn as_paths(&self) -> Option<Vec<PathBuf>> {
        match self {
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Path(p) => Some(p.clone()),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::None => Value::None,
            Constant::Bool(b) => Value::Bool(b),
            Constant::Int(n) => Value::Int(n),
            Constant::Str(s) => Value::Str(s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Path(a), Value::Path(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Module(a), Value::Module(b)) => a.ptr_eq(b),
            (Value::Loader(a), Value::Loader(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Host-language style repr. Modules and loaders print by identity so
/// cyclic module graphs never recurse.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Path(p) => write!(f, "{:?}", p.display().to_string()),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Module(m) => write!(f, "<module {:?}>", m.name()),
            Value::Loader(l) => write!(f, "<mfsimporter {:?}>", l.root().display().to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Path(p) => write!(f, "{}", p.display()),
            other => write!(f, "{other:?}"),
        }
    }
}
