//! Key encoding utilities
//!
//! PEM armor and SubjectPublicKeyInfo (PKIX) handling.

pub mod spki;

pub use spki::{classify_public_key_der, classify_public_key_pem, SpkiAlgorithm};
