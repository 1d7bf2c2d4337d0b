//! Errors raised by the host runtime.

use std::path::PathBuf;

use mfs_import::ImportError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No search path entry supplied the name.
    #[error("No module named '{name}'")]
    ModuleNotFound { name: String },

    /// A submodule was requested from a parent that has no `__path__`.
    #[error("No module named '{name}'; '{parent}' is not a package")]
    NotAPackage { name: String, parent: String },

    /// A module body raised.
    #[error("{message} (in module '{module}', {})", .filename.display())]
    Raised {
        module: String,
        message: String,
        filename: PathBuf,
    },

    /// A module body read an attribute that is not bound.
    #[error("module '{module}' has no attribute '{attr}'")]
    AttributeNotFound { module: String, attr: String },

    /// An importer failed while finding or loading a module.
    #[error(transparent)]
    Import(Box<ImportError<HostError>>),
}

impl From<ImportError<HostError>> for HostError {
    fn from(err: ImportError<HostError>) -> Self {
        HostError::Import(Box::new(err))
    }
}

impl HostError {
    /// The innermost error, following import failures down to their cause.
    ///
    /// A body that raises while importing another body that raises reports
    /// the deepest `Raised`.
    pub fn root_cause(&self) -> &HostError {
        match self {
            HostError::Import(err) => match err.as_ref() {
                ImportError::Execution { source, .. } | ImportError::Registry { source, .. } => {
                    source.root_cause()
                }
                _ => self,
            },
            other => other,
        }
    }
}
