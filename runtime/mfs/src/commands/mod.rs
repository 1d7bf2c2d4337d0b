//! Command handlers for the MFS CLI.
//!
//! Each handler prints its result and exits with status 1 on failure. The
//! formatting lives in plain functions so it can be tested without a
//! process boundary.

mod dis;
mod find;
mod run;

pub use dis::disassemble_file;
pub use find::find_module;
pub use run::run_module;
