//! MFS Import - resolve and load modules from a precompiled module repository.
//!
//! A module repository is a read-only directory of compiled artifacts produced
//! by a packaging step. This crate answers two questions for a host runtime's
//! import system:
//!
//! 1. **Can this repository supply a name?** [`MfsImporter::find_loader`]
//!    classifies a dotted name as a module, a package, a namespace portion, or
//!    nothing at all.
//! 2. **Materialize it.** [`MfsImporter::load_module`] reads the artifact,
//!    decodes it, registers the module with the host and executes its body.
//!
//! # Architecture
//!
//! ```text
//! host import system
//!   ├── find_loader(name) ──► resolve(root, name) ──► Resolution
//!   │                          module file → package init → bare directory
//!   └── load_module(name) ──► read ─► loads ─► get_or_create ─► __loader__
//!                                       ─► __path__ (packages) ─► execute
//! ```
//!
//! The host's module registry is reached only through the [`HostRuntime`]
//! trait, so the import logic runs unchanged against a real runtime or a
//! test double.
//!
//! # Resolution is one segment deep
//!
//! Only the last dotted segment of a name is looked up under the repository
//! root: `a.b.c` probes `<root>/c`. Submodules are found because the host
//! creates a further importer for every entry of the parent package's
//! `__path__`, which points into the package directory.

mod errors;
mod host;
mod importer;
mod loader;
mod name;
mod repository;
mod resolver;

#[cfg(test)]
mod test_support;

pub use errors::{ImportError, RepositoryError, ResolveError};
pub use host::{HostRuntime, ModuleAttr, Registered};
pub use importer::{FindResult, MfsImporter};
pub use name::{
    artifact_file_name, last_segment, parent_name, ARTIFACT_EXTENSION, MAIN_MODULE, PACKAGE_INIT,
};
pub use repository::Repository;
pub use resolver::{resolve, Resolution, ResolutionKind};
