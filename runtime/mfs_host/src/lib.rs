//! MFS Host - a small in-memory runtime that imports from module repositories.
//!
//! Provides the host side of the import protocol that `mfs_import` plugs
//! into:
//!
//! - a process-wide module registry ([`Interpreter`] implements
//!   [`mfs_import::HostRuntime`]),
//! - module objects with attribute tables ([`ModuleRef`], [`Value`]),
//! - execution of decoded code objects,
//! - the import orchestrator that walks search paths, caches one
//!   [`mfs_import::MfsImporter`] per path entry, assembles namespace packages
//!   from portions, and binds submodules onto their parents.
//!
//! # Import walk
//!
//! ```text
//! import("a.b")
//!   ├── registry hit? → done
//!   ├── import("a") → __path__ of a
//!   └── for entry in __path__:
//!         importer(entry).find_loader("a.b")
//!           ├── loader  → load_module → bind as a.b
//!           └── portion → remember; namespace package if nothing loads
//! ```

mod config;
mod errors;
mod exec;
mod interpreter;
mod module;
mod output;
mod stack;
mod value;

pub use config::InterpreterConfig;
pub use errors::HostError;
pub use interpreter::Interpreter;
pub use module::ModuleRef;
pub use output::Output;
pub use value::Value;
