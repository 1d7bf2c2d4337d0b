//! The `find` command: show what a name resolves to.

use mfs_import::{MfsImporter, Resolution};

/// One line per fact: the kind, then the artifact and search path if any.
pub(super) fn describe(name: &str, resolution: &Resolution) -> Vec<String> {
    let mut lines = vec![format!("{name}: {}", resolution.kind())];
    if let Some(artifact) = resolution.artifact() {
        lines.push(format!("  artifact:    {}", artifact.display()));
    }
    if let Some(dir) = resolution.search_path() {
        lines.push(format!("  search path: {}", dir.display()));
    }
    lines
}

pub fn find_module(repo: &str, name: &str) {
    let importer = match MfsImporter::new(repo, None) {
        Ok(importer) => importer,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match importer.resolve(name) {
        Ok(resolution) => {
            for line in describe(name, &resolution) {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
