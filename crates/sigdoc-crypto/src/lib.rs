//! Sigdoc Cryptography Library
//!
//! Cryptographic building blocks for verifying signed documents:
//! public key classification from PEM/PKIX, DER decoding of ECDSA
//! signatures behind a panic boundary, RSA PKCS#1 v1.5 and ECDSA
//! (P-256, P-384) over SHA-256, and the private-key side used to
//! produce documents.

pub mod error;
pub mod isolate;

pub mod asymmetric;
pub mod encoding;
pub mod hash;
pub mod key;
pub mod signature;

pub use encoding::spki::{classify_public_key_der, classify_public_key_pem};
pub use error::{Error, Result};
pub use hash::{sha256, sha256_hex, Sha256Digest};
pub use key::{EcCurve, EcdsaKey, KeyAlgorithm, PrivateKey, PublicKey, RsaKey};
pub use signature::{decode_ecdsa_signature, EcdsaSignatureValue};

// Unbounded integer type shared by RSA key parts and ECDSA scalars
pub use rsa::BigUint;
