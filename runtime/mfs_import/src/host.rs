//! The host runtime capability the loader drives.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mfs_marshal::CodeObject;

use crate::MfsImporter;

/// Outcome of looking a module up in the host registry.
#[derive(Debug, Clone)]
pub struct Registered<M> {
    pub module: M,
    /// `true` when the registry had no entry and this call added one.
    pub created: bool,
}

/// A module attribute the loader sets before executing a body.
#[derive(Debug, Clone)]
pub enum ModuleAttr {
    /// `__loader__`: the importer that owns the module.
    Loader(Arc<MfsImporter>),
    /// `__path__`: where the package's submodules are searched for.
    SearchPath(Vec<PathBuf>),
}

impl ModuleAttr {
    /// The attribute name as the host language spells it.
    pub fn name(&self) -> &'static str {
        match self {
            ModuleAttr::Loader(_) => "__loader__",
            ModuleAttr::SearchPath(_) => "__path__",
        }
    }
}

/// The slice of a host runtime's module system the loader needs.
///
/// The registry is process-wide state owned by the host. The loader assumes
/// the host serializes loads of the same name (an import lock); it does no
/// locking of its own.
pub trait HostRuntime {
    /// Handle to a module object living in the registry.
    type Module: Clone;

    /// The host's own failure type, propagated unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the module registered under `name`, adding an empty one if
    /// there is none.
    fn get_or_create(&self, name: &str) -> Result<Registered<Self::Module>, Self::Error>;

    fn set_attribute(&self, module: &Self::Module, attr: ModuleAttr) -> Result<(), Self::Error>;

    /// Run `code` as the body of `module`, reporting `filename` as the
    /// source location in diagnostics.
    fn execute(
        &self,
        module: &Self::Module,
        code: CodeObject,
        filename: &Path,
    ) -> Result<(), Self::Error>;

    /// Drop the registry entry for `name`, if any.
    fn remove(&self, name: &str);
}
