//! SHA-256 hashing

use sha2::{Digest, Sha256};

/// Output of [`sha256`].
pub type Sha256Digest = [u8; 32];

/// Compute the SHA-256 digest of `data`.
///
/// # Example
/// ```
/// use sigdoc_crypto::hash::sha256;
///
/// let digest = sha256(b"hello world");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Sha256Digest {
    Sha256::digest(data).into()
}

/// Compute the SHA-256 digest of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
