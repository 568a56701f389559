//! SHA-256 hashing for content-addressed memoization keys.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of in-memory data.
pub fn sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Calculate the SHA-256 hash of several parts, length-prefixing each one.
///
/// The length prefix keeps `(["AB"], ["C"])` and `(["A"], ["BC"])` from
/// colliding, so the digest is a sound key for multi-component input tuples
/// (sequence plus parameters).
pub fn sha256_parts(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}
