//! Module name and artifact file name helpers.

/// Extension of an ordinary module's artifact (`<segment>.pyf`).
pub const ARTIFACT_EXTENSION: &str = "pyf";

/// File name of a package initializer inside the package directory.
pub const PACKAGE_INIT: &str = "__init__.pyf";

/// Name the entry-point module is registered and executed under.
pub const MAIN_MODULE: &str = "__main__";

/// The final dotted segment of a module name.
///
/// Returns `None` when there is nothing to look up: the empty name, or a
/// name ending in a dot (`"a."`, `"."`). Segments are returned verbatim,
/// including non-ASCII text.
pub fn last_segment(name: &str) -> Option<&str> {
    let segment = match name.rsplit_once('.') {
        Some((_, last)) => last,
        None => name,
    };
    (!segment.is_empty()).then_some(segment)
}

/// The dotted name of the enclosing package, if any.
///
/// `"a.b.c"` yields `"a.b"`; a top-level name yields `None`.
pub fn parent_name(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(parent, _)| parent)
        .filter(|parent| !parent.is_empty())
}

/// File name of an ordinary module's artifact for `segment`.
pub fn artifact_file_name(segment: &str) -> String {
    format!("{segment}.{ARTIFACT_EXTENSION}")
}

#[cfg(test)]
mod tests;
