//! Errors produced while encoding or decoding artifacts.

/// Why an artifact could not be produced or decoded.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// The leading magic bytes are not `MFS\x1a`.
    #[error("bad magic number in compiled code")]
    BadMagic,

    /// The artifact was written by an incompatible format revision.
    #[error("unsupported compiled code version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    /// Reserved header flags are set.
    #[error("unknown compiled code flags {0:#06x}")]
    UnknownFlags(u16),

    /// Fewer bytes are present than the header promises.
    #[error("compiled code is truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    /// More bytes are present than the header promises.
    #[error("compiled code has {extra} trailing bytes")]
    TrailingBytes { extra: usize },

    /// The payload does not match the checksum recorded in the header.
    #[error("compiled code checksum mismatch: header {expected:016x}, payload {found:016x}")]
    ChecksumMismatch { expected: u64, found: u64 },

    /// The payload passed the integrity checks but is not a code object.
    #[error("failed to decode compiled code: {0}")]
    Decode(#[source] bincode::Error),

    /// The code object could not be serialized.
    #[error("failed to encode compiled code: {0}")]
    Encode(#[source] bincode::Error),

    /// The serialized payload does not fit the 32-bit length field.
    #[error("compiled code payload of {0} bytes is too large")]
    PayloadTooLarge(usize),
}
