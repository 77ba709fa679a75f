//! Content hashing using blake3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let digest = hash::fingerprint(b"some content"); // -> 64-char hex
//! ```

/// Compute blake3 digest of byte data as lowercase hex.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(blake3::hash(data.as_ref()).as_bytes())
}

/// Short form of [`fingerprint`] for display (first 16 hex chars).
#[inline]
pub fn short(fingerprint: &str) -> &str {
    fingerprint.get(..16).unwrap_or(fingerprint)
}
