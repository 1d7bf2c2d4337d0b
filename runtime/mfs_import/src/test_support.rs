//! Fixtures shared by the unit tests: an on-disk repository builder and a
//! recording host runtime.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mfs_marshal::{CodeObject, Instruction};

use crate::{artifact_file_name, HostRuntime, ModuleAttr, Registered, PACKAGE_INIT};

/// Encode a code object, panicking on failure.
pub(crate) fn artifact(code: &CodeObject) -> Vec<u8> {
    mfs_marshal::dumps(code).unwrap_or_else(|e| panic!("failed to encode fixture: {e}"))
}

/// A temporary repository directory.
pub(crate) struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
        Fixture { dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory (and its parents) relative to the root.
    pub(crate) fn make_dir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", path.display()));
        path
    }

    /// Write raw bytes to a file relative to the root.
    pub(crate) fn write_raw(&self, rel: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, bytes).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        path
    }

    /// Write `<root>/<rel>.pyf`.
    pub(crate) fn write_module(&self, rel: &str, code: &CodeObject) -> PathBuf {
        self.write_raw(&artifact_file_name(rel), &artifact(code))
    }

    /// Write `<root>/<rel>/__init__.pyf`.
    pub(crate) fn write_package(&self, rel: &str, code: &CodeObject) -> PathBuf {
        self.write_raw(&format!("{rel}/{PACKAGE_INIT}"), &artifact(code))
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum FakeError {
    #[error("raised: {0}")]
    Raised(String),
    #[error("registry is read-only")]
    ReadOnly,
}

#[derive(Debug, Default)]
pub(crate) struct FakeModule {
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) filename: Option<PathBuf>,
}

/// Host double that records every call the loader makes.
#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    modules: RefCell<BTreeMap<String, FakeModule>>,
    events: RefCell<Vec<String>>,
    read_only: bool,
}

impl FakeHost {
    pub(crate) fn read_only() -> Self {
        FakeHost {
            read_only: true,
            ..FakeHost::default()
        }
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub(crate) fn registered(&self) -> Vec<String> {
        self.modules.borrow().keys().cloned().collect()
    }

    pub(crate) fn attr(&self, module: &str, attr: &str) -> Option<String> {
        self.modules
            .borrow()
            .get(module)
            .and_then(|m| m.attrs.get(attr).cloned())
    }

    pub(crate) fn filename(&self, module: &str) -> Option<PathBuf> {
        self.modules
            .borrow()
            .get(module)
            .and_then(|m| m.filename.clone())
    }
}

impl HostRuntime for FakeHost {
    type Module = String;
    type Error = FakeError;

    fn get_or_create(&self, name: &str) -> Result<Registered<String>, FakeError> {
        if self.read_only {
            return Err(FakeError::ReadOnly);
        }
        let mut modules = self.modules.borrow_mut();
        let created = !modules.contains_key(name);
        modules.entry(name.to_string()).or_default();
        self.events.borrow_mut().push(format!("register {name}"));
        Ok(Registered {
            module: name.to_string(),
            created,
        })
    }

    fn set_attribute(&self, module: &String, attr: ModuleAttr) -> Result<(), FakeError> {
        let key = attr.name().to_string();
        let value = match attr {
            ModuleAttr::Loader(importer) => format!("loader:{}", importer.root().display()),
            ModuleAttr::SearchPath(paths) => paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(":"),
        };
        self.events.borrow_mut().push(format!("set {key}"));
        if let Some(m) = self.modules.borrow_mut().get_mut(module) {
            m.attrs.insert(key, value);
        }
        Ok(())
    }

    fn execute(&self, module: &String, code: CodeObject, filename: &Path) -> Result<(), FakeError> {
        self.events.borrow_mut().push(format!("execute {module}"));
        let mut modules = self.modules.borrow_mut();
        let Some(m) = modules.get_mut(module) else {
            return Err(FakeError::Raised(format!("{module} is not registered")));
        };
        m.filename = Some(filename.to_path_buf());
        for instruction in code.instructions {
            match instruction {
                Instruction::Store { name, value } => {
                    m.attrs.insert(name, value.to_string());
                }
                Instruction::Raise { message } => return Err(FakeError::Raised(message)),
                Instruction::Import { .. } | Instruction::Alias { .. } | Instruction::Print { .. } => {}
            }
        }
        Ok(())
    }

    fn remove(&self, name: &str) {
        self.events.borrow_mut().push(format!("remove {name}"));
        self.modules.borrow_mut().remove(name);
    }
}
