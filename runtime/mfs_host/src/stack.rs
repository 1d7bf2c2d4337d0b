//! Stack growth for nested imports.
//!
//! An `Import` instruction is handled on the importing thread's stack:
//! `Interpreter::import` calls `MfsImporter::load_module`, which calls back
//! into `HostRuntime::execute`, whose body may hit another `Import`. Each
//! level of an import chain (`a` imports `b` imports `c` ...) therefore adds
//! one loader + executor frame set, and a deep chain of packages would
//! exhaust a fixed thread stack. Every `import` goes through here so the
//! chain depth is bounded by memory, not by the main thread's stack size.

/// Headroom needed by one import level: loader, decoder and executor frames.
#[cfg(not(target_arch = "wasm32"))]
const IMPORT_FRAME_HEADROOM: usize = 128 * 1024;

/// Size of each fresh stack segment allocated for deeper imports.
#[cfg(not(target_arch = "wasm32"))]
const IMPORT_SEGMENT: usize = 1024 * 1024;

/// Run one import level, switching to a fresh stack segment when less than
/// [`IMPORT_FRAME_HEADROOM`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(import: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(IMPORT_FRAME_HEADROOM, IMPORT_SEGMENT, import)
}

/// The WASM runtime owns the stack; imports run directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(import: impl FnOnce() -> R) -> R {
    import()
}
