//! The finder/loader object a host installs for one repository.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    loader, HostRuntime, ImportError, Repository, RepositoryError, Resolution, ResolveError,
    MAIN_MODULE,
};

/// Answer of [`MfsImporter::find_loader`].
///
/// | resolution | `loader` | `portions` |
/// |---|---|---|
/// | module or package | this importer | empty |
/// | namespace | `None` | the directory |
/// | not found | `None` | empty |
#[derive(Debug, Clone)]
pub struct FindResult {
    pub loader: Option<Arc<MfsImporter>>,
    pub portions: Vec<PathBuf>,
}

impl FindResult {
    fn none() -> Self {
        FindResult {
            loader: None,
            portions: Vec::new(),
        }
    }
}

/// Importer for a single module repository.
///
/// Shared behind an `Arc`: modules it loads keep a reference to it as their
/// `__loader__`.
#[derive(Debug)]
pub struct MfsImporter {
    repository: Repository,
    /// Module that is run as `__main__` instead of under its own name.
    main: RwLock<Option<String>>,
}

impl MfsImporter {
    /// Create an importer for the directory at `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        main: Option<String>,
    ) -> Result<Arc<Self>, RepositoryError> {
        let repository = Repository::open(path)?;
        Ok(Arc::new(MfsImporter {
            repository,
            main: RwLock::new(main),
        }))
    }

    pub fn root(&self) -> &Path {
        self.repository.root()
    }

    /// The configured entry-point module name.
    pub fn main(&self) -> Option<String> {
        self.main.read().clone()
    }

    /// Replace the entry-point module name. Affects subsequent loads only.
    pub fn set_main(&self, main: Option<String>) {
        *self.main.write() = main;
    }

    /// The name `name` is registered and executed under.
    ///
    /// Identical to `name` except for the configured entry point, which maps
    /// to [`MAIN_MODULE`].
    pub fn registered_name<'a>(&self, name: &'a str) -> &'a str {
        if self.main.read().as_deref() == Some(name) {
            MAIN_MODULE
        } else {
            name
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        self.repository.resolve(name)
    }

    /// Decide whether this repository can supply `name`.
    pub fn find_loader(self: &Arc<Self>, name: &str) -> Result<FindResult, ResolveError> {
        let found = match self.resolve(name)? {
            Resolution::Module { .. } | Resolution::Package { .. } => FindResult {
                loader: Some(Arc::clone(self)),
                portions: Vec::new(),
            },
            Resolution::Namespace { search_path } => FindResult {
                loader: None,
                portions: vec![search_path],
            },
            Resolution::NotFound => FindResult::none(),
        };
        Ok(found)
    }

    /// Load a module from an existing resolution.
    ///
    /// Namespace and not-found resolutions are a caller error and produce
    /// [`ImportError::PreconditionViolation`].
    pub fn load<H: HostRuntime>(
        self: &Arc<Self>,
        host: &H,
        name: &str,
        resolution: &Resolution,
    ) -> Result<H::Module, ImportError<H::Error>> {
        loader::load(self, host, name, resolution)
    }

    /// Resolve and load `name`, returning the executed module.
    pub fn load_module<H: HostRuntime>(
        self: &Arc<Self>,
        host: &H,
        name: &str,
    ) -> Result<H::Module, ImportError<H::Error>> {
        let resolution = self.resolve(name)?;
        if !resolution.is_loadable() {
            return Err(ImportError::NameNotFound {
                name: name.to_string(),
            });
        }
        self.load(host, name, &resolution)
    }
}
