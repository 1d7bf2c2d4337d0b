//! Materializing a resolved module inside the host runtime.
//!
//! A load runs Read → Decode → Register → Initialize → Execute. Any failure
//! short-circuits; a registry entry created by this load is removed again
//! before the error is returned, so a failed import never leaves a half
//! initialized module behind under its name.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use mfs_marshal::CodeObject;

use crate::{HostRuntime, ImportError, MfsImporter, ModuleAttr, Registered, Resolution};

/// Load the module or package described by `resolution` as `name`.
pub(crate) fn load<H: HostRuntime>(
    importer: &Arc<MfsImporter>,
    host: &H,
    name: &str,
    resolution: &Resolution,
) -> Result<H::Module, ImportError<H::Error>> {
    let (artifact, search_path) = match resolution {
        Resolution::Module { artifact } => (artifact.as_path(), None),
        Resolution::Package {
            artifact,
            search_path,
        } => (artifact.as_path(), Some(search_path.as_path())),
        Resolution::Namespace { .. } | Resolution::NotFound => {
            return Err(ImportError::PreconditionViolation {
                name: name.to_string(),
                kind: resolution.kind(),
            });
        }
    };

    let _span = tracing::debug_span!("load_module", name).entered();

    let bytes = fs::read(artifact).map_err(|source| ImportError::ArtifactUnreadable {
        name: name.to_string(),
        path: artifact.to_path_buf(),
        source,
    })?;

    let code = mfs_marshal::loads(&bytes).map_err(|source| ImportError::CorruptArtifact {
        name: name.to_string(),
        path: artifact.to_path_buf(),
        source,
    })?;
    drop(bytes);

    // From here on the entry point is known only by the reserved name.
    let target = importer.registered_name(name);
    if target != name {
        tracing::debug!(name, target, "loading entry point");
    }

    let Registered { module, created } =
        host.get_or_create(target)
            .map_err(|source| ImportError::Registry {
                name: target.to_string(),
                source,
            })?;

    match initialize(importer, host, &module, target, code, artifact, search_path) {
        Ok(()) => {
            tracing::debug!(name = target, path = %artifact.display(), "loaded");
            Ok(module)
        }
        Err(err) => {
            if created {
                tracing::warn!(name = target, "load failed, removing module from registry");
                host.remove(target);
            }
            Err(err)
        }
    }
}

fn initialize<H: HostRuntime>(
    importer: &Arc<MfsImporter>,
    host: &H,
    module: &H::Module,
    target: &str,
    code: CodeObject,
    artifact: &Path,
    search_path: Option<&Path>,
) -> Result<(), ImportError<H::Error>> {
    let registry_error = |source| ImportError::Registry {
        name: target.to_string(),
        source,
    };

    host.set_attribute(module, ModuleAttr::Loader(Arc::clone(importer)))
        .map_err(registry_error)?;

    // Nested imports run by the initializer need the package's search path.
    if let Some(dir) = search_path {
        host.set_attribute(module, ModuleAttr::SearchPath(vec![dir.to_path_buf()]))
            .map_err(registry_error)?;
    }

    host.execute(module, code, artifact)
        .map_err(|source| ImportError::Execution {
            name: target.to_string(),
            source,
        })
}
