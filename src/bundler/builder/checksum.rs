//! Content digest calculation.
//!
//! This module provides SHA-256 digests of bundled files, encoded as
//! 64 lowercase hex characters.

use sha2::{Digest, Sha256};

/// Digest of the empty byte sequence.
#[cfg(test)]
pub(crate) const EMPTY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Hex-encoded SHA-256 of `bytes`.
///
/// The pipeline digests the same buffer it emits, so digest and literal
/// can never disagree.
pub fn digest_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
