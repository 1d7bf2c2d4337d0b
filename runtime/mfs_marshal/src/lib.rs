//! MFS Marshal - native compiled-code format for module repositories.
//!
//! A module repository is a directory tree of precompiled artifacts. Each
//! artifact holds exactly one [`CodeObject`] framed by a fixed header:
//!
//! ```text
//! offset  size  field
//! 0       4     magic     b"MFS\x1a"
//! 4       2     version   FORMAT_VERSION (little-endian)
//! 6       2     flags     reserved, must be zero
//! 8       4     length    payload byte count
//! 12      8     checksum  FxHash of the payload
//! 20      ..    payload   bincode-encoded CodeObject
//! ```
//!
//! [`dumps`] produces artifacts, [`loads`] validates and decodes them. A
//! truncated, padded, or bit-flipped artifact is always rejected with a
//! [`MarshalError`] and never decoded into a different code object.

mod code;
mod error;
mod format;

pub use code::{CodeObject, Constant, Instruction};
pub use error::MarshalError;
pub use format::{dumps, loads, FORMAT_VERSION, HEADER_LEN, MAGIC};
