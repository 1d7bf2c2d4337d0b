//! Module objects.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use mfs_import::MfsImporter;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Value;

struct ModuleData {
    name: String,
    attrs: FxHashMap<String, Value>,
}

/// Shared handle to a module object.
///
/// Clones refer to the same module; attribute writes through one handle are
/// visible through all of them, which is what lets a package body observe
/// `__path__` set by the loader before it runs.
#[derive(Clone)]
pub struct ModuleRef(Arc<RwLock<ModuleData>>);

impl ModuleRef {
    /// Create an empty module with `__name__` bound.
    pub fn new(name: &str) -> Self {
        let mut attrs = FxHashMap::default();
        attrs.insert("__name__".to_string(), Value::Str(name.to_string()));
        ModuleRef(Arc::new(RwLock::new(ModuleData {
            name: name.to_string(),
            attrs,
        })))
    }

    /// The name the module was registered under.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    pub fn get(&self, attr: &str) -> Option<Value> {
        self.0.read().attrs.get(attr).cloned()
    }

    pub fn set(&self, attr: &str, value: Value) {
        self.0.write().attrs.insert(attr.to_string(), value);
    }

    pub fn contains(&self, attr: &str) -> bool {
        self.0.read().attrs.contains_key(attr)
    }

    /// Attribute names in sorted order.
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.read().attrs.keys().cloned().collect();
        names.sort();
        names
    }

    /// `__path__`, present only on packages.
    pub fn search_path(&self) -> Option<Vec<PathBuf>> {
        self.get("__path__").and_then(|v| v.as_paths())
    }

    /// `__loader__`, absent on namespace packages.
    pub fn loader(&self) -> Option<Arc<MfsImporter>> {
        match self.get("__loader__") {
            Some(Value::Loader(loader)) => Some(loader),
            _ => None,
        }
    }

    /// `__file__`, the artifact the body was executed from.
    pub fn file(&self) -> Option<PathBuf> {
        match self.get("__file__") {
            Some(Value::Path(path)) => Some(path),
            _ => None,
        }
    }

    pub fn ptr_eq(&self, other: &ModuleRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<module {:?}>", self.name())
    }
}
