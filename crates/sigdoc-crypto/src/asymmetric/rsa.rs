use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::Sha256;

use crate::{
    error::{Error, Result},
    key::RsaKey,
};

/// Generate a new RSA private key with the given modulus length.
pub fn generate(bits: usize) -> Result<RsaPrivateKey> {
    let mut rng = rand::thread_rng();
    RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| Error::Other(format!("Failed to generate RSA key: {}", e)))
}

/// Sign a SHA-256 digest using PKCS#1 v1.5
pub fn sign_pkcs1v15_sha256(key: &RsaPrivateKey, digest: &[u8; 32]) -> Result<Vec<u8>> {
    key.sign(Pkcs1v15Sign::new::<Sha256>(), digest)
        .map_err(|e| Error::Signing(format!("RSA signing failed: {}", e)))
}

/// Verify a PKCS#1 v1.5 signature over a SHA-256 digest.
///
/// Wrong length, bad padding, a DigestInfo for another hash and a plain
/// mismatch all come back as `false`.
pub fn verify_pkcs1v15_sha256(key: &RsaKey, digest: &[u8; 32], signature: &[u8]) -> bool {
    key.as_rsa()
        .verify(Pkcs1v15Sign::new::<Sha256>(), digest, signature)
        .is_ok()
}
