//! Name resolution against a repository directory.
//!
//! Resolution probes at most three filesystem entries and never reads file
//! contents. Probes happen in a fixed order and the first hit wins:
//!
//! 1. `<root>/<segment>.pyf` is a file → [`Resolution::Module`]
//! 2. `<root>/<segment>/__init__.pyf` is a file → [`Resolution::Package`]
//! 3. `<root>/<segment>` is a directory → [`Resolution::Namespace`]
//!
//! Other finders in a multi-repository chain rely on this order, so a module
//! file shadows a package directory of the same name.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::{artifact_file_name, last_segment, ResolveError, PACKAGE_INIT};

/// Which shape, if any, a name has in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing under any recognized shape.
    NotFound,
    /// An ordinary module artifact.
    Module { artifact: PathBuf },
    /// A package initializer inside a same-named directory.
    Package {
        artifact: PathBuf,
        search_path: PathBuf,
    },
    /// A directory without an initializer: one portion of a namespace package.
    Namespace { search_path: PathBuf },
}

/// The tag of a [`Resolution`], without its paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    NotFound,
    Module,
    Package,
    Namespace,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ResolutionKind::NotFound => "nothing",
            ResolutionKind::Module => "a module",
            ResolutionKind::Package => "a package",
            ResolutionKind::Namespace => "a namespace package",
        };
        f.write_str(text)
    }
}

impl Resolution {
    pub fn kind(&self) -> ResolutionKind {
        match self {
            Resolution::NotFound => ResolutionKind::NotFound,
            Resolution::Module { .. } => ResolutionKind::Module,
            Resolution::Package { .. } => ResolutionKind::Package,
            Resolution::Namespace { .. } => ResolutionKind::Namespace,
        }
    }

    /// The artifact to load, for modules and packages.
    pub fn artifact(&self) -> Option<&Path> {
        match self {
            Resolution::Module { artifact } | Resolution::Package { artifact, .. } => {
                Some(artifact)
            }
            Resolution::NotFound | Resolution::Namespace { .. } => None,
        }
    }

    /// The directory to expose as a package search path.
    pub fn search_path(&self) -> Option<&Path> {
        match self {
            Resolution::Package { search_path, .. } | Resolution::Namespace { search_path } => {
                Some(search_path)
            }
            Resolution::NotFound | Resolution::Module { .. } => None,
        }
    }

    /// Whether the loader can materialize this resolution.
    pub fn is_loadable(&self) -> bool {
        self.artifact().is_some()
    }
}

/// What a probed path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Missing,
    File,
    Directory,
    Other,
}

/// Classify `name` against the repository at `root`.
///
/// Only the final dotted segment is looked up. A name without a usable
/// segment (empty, trailing dot, or a segment that is not a single path
/// component such as `..` or `a/b`) resolves to [`Resolution::NotFound`].
///
/// Probe failures other than "does not exist" are returned as errors rather
/// than folded into `NotFound`.
pub fn resolve(root: &Path, name: &str) -> Result<Resolution, ResolveError> {
    let Some(segment) = last_segment(name).filter(|s| is_single_component(s)) else {
        tracing::trace!(name, "no usable final segment");
        return Ok(Resolution::NotFound);
    };

    let resolution = classify(root, segment)?;
    tracing::debug!(name, kind = ?resolution.kind(), root = %root.display(), "resolved");
    Ok(resolution)
}

fn classify(root: &Path, segment: &str) -> Result<Resolution, ResolveError> {
    let artifact = root.join(artifact_file_name(segment));
    if probe(&artifact)? == Entry::File {
        return Ok(Resolution::Module { artifact });
    }

    let base = root.join(segment);
    if probe(&base)? != Entry::Directory {
        return Ok(Resolution::NotFound);
    }

    let init = base.join(PACKAGE_INIT);
    if probe(&init)? == Entry::File {
        return Ok(Resolution::Package {
            artifact: init,
            search_path: base,
        });
    }

    Ok(Resolution::Namespace { search_path: base })
}

fn probe(path: &Path) -> Result<Entry, ResolveError> {
    let entry = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Entry::File,
        Ok(meta) if meta.is_dir() => Entry::Directory,
        Ok(_) => Entry::Other,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Entry::Missing,
        Err(source) => {
            return Err(ResolveError {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    tracing::trace!(path = %path.display(), ?entry, "probe");
    Ok(entry)
}

fn is_single_component(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == segment
    )
}
