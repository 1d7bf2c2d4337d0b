//! Error taxonomy for resolving and loading modules.
//!
//! Each failure class is a separate variant so the host can tell "nothing
//! here" apart from "something here that cannot be used". None of them are
//! retried internally.

use std::io;
use std::path::PathBuf;

use mfs_marshal::MarshalError;

use crate::ResolutionKind;

/// The importer was constructed for a path that is not a directory.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("not a valid module repository: {}", .path.display())]
    InvalidRepository { path: PathBuf },
}

/// A filesystem probe failed for a reason other than "does not exist".
#[derive(Debug, thiserror::Error)]
#[error("cannot inspect {}: {source}", .path.display())]
pub struct ResolveError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A module could not be imported from a repository.
///
/// `E` is the host runtime's own error type. Failures raised by the host
/// (registry operations, module body execution) are carried unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ImportError<E> {
    /// No artifact exists for the name under any recognized shape.
    #[error("cannot find module '{name}'")]
    NameNotFound { name: String },

    /// The repository could not be inspected.
    #[error(transparent)]
    Probe(#[from] ResolveError),

    /// The artifact exists but could not be opened or read.
    #[error("error opening file for module '{name}': {}", .path.display())]
    ArtifactUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The artifact was read but is not valid compiled code.
    #[error("corrupt compiled code for module '{name}' in {}", .path.display())]
    CorruptArtifact {
        name: String,
        path: PathBuf,
        #[source]
        source: MarshalError,
    },

    /// A load was requested for a resolution with nothing to load.
    #[error("cannot load module '{name}': it resolved to {kind}")]
    PreconditionViolation { name: String, kind: ResolutionKind },

    /// The host module registry refused an operation.
    #[error("module registry rejected '{name}': {source}")]
    Registry {
        name: String,
        #[source]
        source: E,
    },

    /// The module body failed while executing.
    #[error("module '{name}' failed during execution: {source}")]
    Execution {
        name: String,
        #[source]
        source: E,
    },
}

impl<E> ImportError<E> {
    /// The module name the error is about, where one applies.
    pub fn module_name(&self) -> Option<&str> {
        match self {
            ImportError::Probe(_) => None,
            ImportError::NameNotFound { name }
            | ImportError::ArtifactUnreadable { name, .. }
            | ImportError::CorruptArtifact { name, .. }
            | ImportError::PreconditionViolation { name, .. }
            | ImportError::Registry { name, .. }
            | ImportError::Execution { name, .. } => Some(name),
        }
    }

    /// Recover the host's own error for registry and execution failures.
    pub fn into_host_error(self) -> Result<E, Self> {
        match self {
            ImportError::Registry { source, .. } | ImportError::Execution { source, .. } => {
                Ok(source)
            }
            other => Err(other),
        }
    }
}
