//! The `run` command: execute a module as `__main__`.

use std::path::PathBuf;

use mfs_host::{HostError, Interpreter, InterpreterConfig};

/// Search path for `run`: the primary repository, then the extras in order.
pub(super) fn build_config(repo: &str, extra: &[PathBuf]) -> InterpreterConfig {
    extra
        .iter()
        .fold(InterpreterConfig::new().with_path(repo), |config, dir| {
            config.with_path(dir)
        })
}

/// Error report for a failed run: the error, plus its innermost cause when
/// that differs.
pub(super) fn describe_failure(err: &HostError) -> Vec<String> {
    let mut lines = vec![format!("error: {err}")];
    let root = err.root_cause();
    if !std::ptr::eq(root, err) {
        lines.push(format!("caused by: {root}"));
    }
    lines
}

pub fn run_module(repo: &str, module: &str, extra: &[PathBuf]) {
    let interp = Interpreter::new(build_config(repo, extra));
    tracing::debug!(repo, module, "running entry point");

    if let Err(err) = interp.run_main(module) {
        for line in describe_failure(&err) {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}
