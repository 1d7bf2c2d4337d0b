//! The module repository root.

use std::path::{Path, PathBuf};

use crate::{resolve, RepositoryError, Resolution, ResolveError};

/// A directory of compiled artifacts.
///
/// The root is fixed at construction. Relative paths are anchored to the
/// current directory once, so later changes of the working directory do not
/// move the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Open an existing directory as a repository.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let root = std::path::absolute(&path)
            .map_err(|_| RepositoryError::InvalidRepository { path: path.clone() })?;

        if !root.is_dir() {
            tracing::debug!(root = %root.display(), "rejecting repository: not a directory");
            return Err(RepositoryError::InvalidRepository { path });
        }

        Ok(Repository { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Classify `name` against this repository. See [`resolve`].
    pub fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        resolve(&self.root, name)
    }
}
