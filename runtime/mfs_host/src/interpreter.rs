//! The interpreter: module registry plus the import orchestrator.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mfs_import::{
    last_segment, parent_name, HostRuntime, ImportError, MfsImporter, ModuleAttr, Registered,
    MAIN_MODULE,
};
use mfs_marshal::CodeObject;
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{debug, debug_span};

use crate::stack::ensure_sufficient_stack;
use crate::{exec, HostError, InterpreterConfig, ModuleRef, Output, Value};

/// A single-process runtime hosting modules loaded from repositories.
///
/// Registry and importer cache are process state shared by every import.
/// Imports are serialized by a reentrant lock, so a body executing on the
/// importing thread may import further modules while other threads wait.
pub struct Interpreter {
    search_path: Vec<PathBuf>,
    entry_point: RwLock<Option<String>>,
    modules: Mutex<FxHashMap<String, ModuleRef>>,
    /// One importer per search path entry; `None` when the entry is not a
    /// repository.
    importers: Mutex<FxHashMap<PathBuf, Option<Arc<MfsImporter>>>>,
    import_lock: ReentrantMutex<()>,
    output: Output,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Interpreter {
            search_path: config.search_path,
            entry_point: RwLock::new(config.entry_point),
            modules: Mutex::new(FxHashMap::default()),
            importers: Mutex::new(FxHashMap::default()),
            import_lock: ReentrantMutex::new(()),
            output: config.output,
        }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn entry_point(&self) -> Option<String> {
        self.entry_point.read().clone()
    }

    /// Change the entry point for this interpreter and every importer it
    /// has created.
    pub fn set_entry_point(&self, name: Option<String>) {
        let _guard = self.import_lock.lock();
        let importers = self.importers.lock();
        for importer in importers.values().flatten() {
            importer.set_main(name.clone());
        }
        *self.entry_point.write() = name;
    }

    /// The registered module called `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<ModuleRef> {
        self.modules.lock().get(name).cloned()
    }

    /// Registered module names, sorted.
    pub fn modules(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Import `module` as the program entry point and return `__main__`.
    pub fn run_main(&self, module: &str) -> Result<ModuleRef, HostError> {
        self.set_entry_point(Some(module.to_string()));
        self.import(module)
    }

    /// Import `name`, loading it and any missing parents.
    pub fn import(&self, name: &str) -> Result<ModuleRef, HostError> {
        let _guard = self.import_lock.lock();
        ensure_sufficient_stack(|| self.import_unlocked(name))
    }

    fn import_unlocked(&self, name: &str) -> Result<ModuleRef, HostError> {
        if name.split('.').any(str::is_empty) {
            return Err(HostError::ModuleNotFound {
                name: name.to_string(),
            });
        }

        if let Some(module) = self.lookup(self.registered_name(name)) {
            return Ok(module);
        }

        let parent = match parent_name(name) {
            Some(parent) => Some(self.import(parent)?),
            None => None,
        };
        let search_path = match &parent {
            Some(parent) => parent.search_path().ok_or_else(|| HostError::NotAPackage {
                name: name.to_string(),
                parent: parent.name(),
            })?,
            None => self.search_path.clone(),
        };

        // The parent's body may have imported us already.
        if let Some(module) = self.lookup(self.registered_name(name)) {
            return Ok(module);
        }

        let _span = debug_span!("import", name).entered();
        let mut portions = Vec::new();
        for entry in &search_path {
            let Some(importer) = self.importer_for(entry) else {
                continue;
            };
            let found = importer
                .find_loader(name)
                .map_err(|e| HostError::from(ImportError::from(e)))?;
            if let Some(loader) = found.loader {
                let module = loader.load_module(self, name)?;
                bind_on_parent(parent.as_ref(), name, &module);
                return Ok(module);
            }
            portions.extend(found.portions);
        }

        if portions.is_empty() {
            return Err(HostError::ModuleNotFound {
                name: name.to_string(),
            });
        }

        let target = self.registered_name(name);
        debug!(name, target, portions = portions.len(), "namespace package");
        let module = ModuleRef::new(target);
        module.set("__path__", paths_value(portions));
        self.modules
            .lock()
            .insert(target.to_string(), module.clone());
        bind_on_parent(parent.as_ref(), name, &module);
        Ok(module)
    }

    fn registered_name<'a>(&self, name: &'a str) -> &'a str {
        if self.entry_point.read().as_deref() == Some(name) {
            MAIN_MODULE
        } else {
            name
        }
    }

    /// The cached importer for a search path entry, creating it on first use.
    fn importer_for(&self, entry: &Path) -> Option<Arc<MfsImporter>> {
        let mut importers = self.importers.lock();
        if let Some(cached) = importers.get(entry) {
            return cached.clone();
        }
        let importer = match MfsImporter::new(entry, self.entry_point()) {
            Ok(importer) => Some(importer),
            Err(e) => {
                debug!(entry = %entry.display(), error = %e, "no importer for path entry");
                None
            }
        };
        importers.insert(entry.to_path_buf(), importer.clone());
        importer
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("search_path", &self.search_path)
            .field("entry_point", &self.entry_point())
            .field("modules", &self.modules())
            .finish_non_exhaustive()
    }
}

fn paths_value(paths: Vec<PathBuf>) -> Value {
    Value::List(paths.into_iter().map(Value::Path).collect())
}

fn bind_on_parent(parent: Option<&ModuleRef>, name: &str, module: &ModuleRef) {
    if let (Some(parent), Some(attr)) = (parent, last_segment(name)) {
        parent.set(attr, Value::Module(module.clone()));
    }
}

impl HostRuntime for Interpreter {
    type Module = ModuleRef;
    type Error = HostError;

    fn get_or_create(&self, name: &str) -> Result<Registered<ModuleRef>, HostError> {
        let mut modules = self.modules.lock();
        if let Some(module) = modules.get(name) {
            return Ok(Registered {
                module: module.clone(),
                created: false,
            });
        }
        let module = ModuleRef::new(name);
        modules.insert(name.to_string(), module.clone());
        Ok(Registered {
            module,
            created: true,
        })
    }

    fn set_attribute(&self, module: &ModuleRef, attr: ModuleAttr) -> Result<(), HostError> {
        let name = attr.name();
        let value = match attr {
            ModuleAttr::Loader(loader) => Value::Loader(loader),
            ModuleAttr::SearchPath(paths) => paths_value(paths),
        };
        module.set(name, value);
        Ok(())
    }

    fn execute(&self, module: &ModuleRef, code: CodeObject, filename: &Path) -> Result<(), HostError> {
        module.set("__name__", Value::Str(module.name()));
        module.set("__file__", Value::Path(filename.to_path_buf()));
        exec::run(self, module, code, filename)
    }

    fn remove(&self, name: &str) {
        self.modules.lock().remove(name);
    }
}
