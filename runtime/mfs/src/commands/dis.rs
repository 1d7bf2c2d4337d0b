//! The `dis` command: print the code object inside an artifact.

use std::path::Path;

use mfs_marshal::CodeObject;

pub(super) fn read_artifact(path: &Path) -> Result<CodeObject, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    mfs_marshal::loads(&bytes).map_err(|e| format!("{}: {e}", path.display()))
}

pub fn disassemble_file(path: &str) {
    match read_artifact(Path::new(path)) {
        Ok(code) => print!("{code}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
