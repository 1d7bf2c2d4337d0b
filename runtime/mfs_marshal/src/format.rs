//! Artifact framing: header, checksum, and payload.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{CodeObject, MarshalError};

/// Leading bytes of every artifact.
pub const MAGIC: [u8; 4] = *b"MFS\x1a";

/// Revision of the artifact layout written by [`dumps`].
pub const FORMAT_VERSION: u16 = 1;

/// Size of the fixed header preceding the payload.
pub const HEADER_LEN: usize = 20;

/// Serialize a code object into artifact bytes.
pub fn dumps(code: &CodeObject) -> Result<Vec<u8>, MarshalError> {
    let payload = bincode::serialize(code).map_err(MarshalError::Encode)?;
    let length =
        u32::try_from(payload.len()).map_err(|_| MarshalError::PayloadTooLarge(payload.len()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&length.to_le_bytes());
    bytes.extend_from_slice(&checksum(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Validate artifact bytes and decode the code object they carry.
///
/// The header is checked field by field before the payload is touched, so
/// the error names the first thing that is wrong.
pub fn loads(bytes: &[u8]) -> Result<CodeObject, MarshalError> {
    let header = Header::parse(bytes)?;

    let payload = &bytes[HEADER_LEN..];
    let expected = header.length as usize;
    if payload.len() < expected {
        return Err(MarshalError::Truncated {
            expected: HEADER_LEN + expected,
            found: bytes.len(),
        });
    }
    if payload.len() > expected {
        return Err(MarshalError::TrailingBytes {
            extra: payload.len() - expected,
        });
    }

    let found = checksum(payload);
    if found != header.checksum {
        return Err(MarshalError::ChecksumMismatch {
            expected: header.checksum,
            found,
        });
    }

    bincode::deserialize(payload).map_err(MarshalError::Decode)
}

struct Header {
    length: u32,
    checksum: u64,
}

impl Header {
    fn parse(bytes: &[u8]) -> Result<Self, MarshalError> {
        let available = bytes.len().min(MAGIC.len());
        if bytes[..available] != MAGIC[..available] {
            return Err(MarshalError::BadMagic);
        }
        if bytes.len() < HEADER_LEN {
            return Err(MarshalError::Truncated {
                expected: HEADER_LEN,
                found: bytes.len(),
            });
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != FORMAT_VERSION {
            return Err(MarshalError::UnsupportedVersion {
                found: version,
                expected: FORMAT_VERSION,
            });
        }

        let flags = u16::from_le_bytes([bytes[6], bytes[7]]);
        if flags != 0 {
            return Err(MarshalError::UnknownFlags(flags));
        }

        let length = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let checksum = u64::from_le_bytes([
            bytes[12], bytes[13], bytes[14], bytes[15], bytes[16], bytes[17], bytes[18], bytes[19],
        ]);

        Ok(Header { length, checksum })
    }
}

fn checksum(payload: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    payload.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests;
