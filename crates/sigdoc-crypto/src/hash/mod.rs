//! Digest and text-encoding helpers
//!
//! SHA-256 is the only digest used for document signatures; the base64
//! helpers cover the signature field of a signed document.

pub mod base64;
pub mod sha;

pub use sha::{sha256, sha256_hex, Sha256Digest};
