//! ECDSA over P-256, P-384 and P-521 with a SHA-256 prehash
//!
//! Signatures travel as DER `(r, s)` sequences; see
//! [`crate::signature`] for the decoder. On P-384 and P-521 the 32-byte
//! digest is shorter than the scalar and is taken as an integer as-is,
//! the same as any other ECDSA implementation that signs SHA-256 digests
//! with a larger curve. P-521 is verification only.

use p256::{
    ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier},
    elliptic_curve::sec1::ToEncodedPoint,
};

use crate::{
    error::{Error, Result},
    key::{CurveKey, EcdsaKey},
    signature::EcdsaSignatureValue,
};

/// Sign a SHA-256 digest with a P-256 key, returning a DER signature.
pub fn sign_prehash_p256(key: &p256::ecdsa::SigningKey, digest: &[u8; 32]) -> Result<Vec<u8>> {
    let signature: p256::ecdsa::Signature = key
        .sign_prehash(digest)
        .map_err(|e| Error::Signing(format!("P-256 signing failed: {}", e)))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Sign a SHA-256 digest with a P-384 key, returning a DER signature.
pub fn sign_prehash_p384(key: &p384::ecdsa::SigningKey, digest: &[u8; 32]) -> Result<Vec<u8>> {
    let signature: p384::ecdsa::Signature = key
        .sign_prehash(digest)
        .map_err(|e| Error::Signing(format!("P-384 signing failed: {}", e)))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Left-pad `digest` with zeros to the curve's scalar size.
///
/// The integer value is unchanged; `ecdsa` refuses prehashes shorter than
/// half the field size, which a SHA-256 digest is on P-521.
fn field_prehash(digest: &[u8; 32], scalar_size: usize) -> Vec<u8> {
    let len = scalar_size.max(digest.len());
    let mut prehash = vec![0u8; len];
    prehash[len - digest.len()..].copy_from_slice(digest);
    prehash
}

/// Verify a decoded `(r, s)` pair against a SHA-256 digest.
///
/// `r` or `s` that is zero, not below the group order, or wider than the
/// curve's scalar size fails verification.
pub fn verify_prehash(key: &EcdsaKey, digest: &[u8; 32], value: &EcdsaSignatureValue) -> bool {
    let scalar_size = key.curve().scalar_size();
    let Some(rs) = value.to_fixed_bytes(scalar_size) else {
        tracing::debug!(curve = key.curve().name(), "signature scalars wider than the curve order");
        return false;
    };
    let prehash = field_prehash(digest, scalar_size);

    match key.curve_key() {
        CurveKey::P256(vk) => match p256::ecdsa::Signature::from_slice(&rs) {
            Ok(signature) => vk.verify_prehash(&prehash, &signature).is_ok(),
            Err(_) => false,
        },
        CurveKey::P384(vk) => match p384::ecdsa::Signature::from_slice(&rs) {
            Ok(signature) => vk.verify_prehash(&prehash, &signature).is_ok(),
            Err(_) => false,
        },
        CurveKey::P521(pk) => {
            let point = pk.to_encoded_point(false);
            let Ok(vk) = p521::ecdsa::VerifyingKey::from_sec1_bytes(point.as_bytes()) else {
                return false;
            };
            match p521::ecdsa::Signature::from_slice(&rs) {
                Ok(signature) => vk.verify_prehash(&prehash, &signature).is_ok(),
                Err(_) => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hash::sha256,
        key::{KeyAlgorithm, PrivateKey, PublicKey},
        signature::decode_ecdsa_signature,
        BigUint,
    };

    fn key_pair(algorithm: KeyAlgorithm) -> (PrivateKey, EcdsaKey) {
        let private = PrivateKey::generate(algorithm).unwrap();
        let PublicKey::Ecdsa(public) = private.public_key() else {
            panic!("expected ECDSA key");
        };
        (private, public)
    }

    #[test]
    fn test_p256_sign_verify() {
        let (private, public) = key_pair(KeyAlgorithm::P256);
        let digest = sha256(b"Hello, P-256!");
        let der = private.sign_digest(&digest).unwrap();
        let value = decode_ecdsa_signature(&der).unwrap();
        assert!(verify_prehash(&public, &digest, &value));
    }

    #[test]
    fn test_p384_sign_verify() {
        let (private, public) = key_pair(KeyAlgorithm::P384);
        let digest = sha256(b"Hello, P-384!");
        let der = private.sign_digest(&digest).unwrap();
        let value = decode_ecdsa_signature(&der).unwrap();
        assert!(verify_prehash(&public, &digest, &value));
        assert!(!verify_prehash(&public, &sha256(b"Hello, P-384?"), &value));
    }

    #[test]
    fn test_signature_from_other_curve_fails() {
        let (p256_private, _) = key_pair(KeyAlgorithm::P256);
        let (_, p384_public) = key_pair(KeyAlgorithm::P384);
        let digest = sha256(b"cross-curve");
        let der = p256_private.sign_digest(&digest).unwrap();
        let value = decode_ecdsa_signature(&der).unwrap();
        assert!(!verify_prehash(&p384_public, &digest, &value));
    }

    #[test]
    fn test_prehash_padding_keeps_value() {
        let digest = sha256(b"x");
        assert_eq!(field_prehash(&digest, 32), digest.to_vec());

        let padded = field_prehash(&digest, 66);
        assert_eq!(padded.len(), 66);
        assert!(padded[..34].iter().all(|b| *b == 0));
        assert_eq!(&padded[34..], &digest[..]);
    }

    #[test]
    fn test_p521_openssl_signature() {
        let pem = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/p521_public.pem"));
        let PublicKey::Ecdsa(public) = crate::classify_public_key_pem(pem.as_bytes()).unwrap() else {
            panic!("expected ECDSA key");
        };
        // `openssl dgst -sha256 -sign` over "hello world"
        let der = crate::hash::base64::decode(
            "MIGGAkFveg/lCr78vyr/IF+aRX8zZvgt8UQbHsiayWShnA0JoXOck18krcI3EET+zM161vJFJ37kraqJHmeUCH7HAqEIYAJBOaa2hCVv3iBiVROFILJwVG8mvwKIOVwQQYvfmojClo7SBmqU2Gv7QbFNlA/uIOK+EyLYo1aDZobBuREAga/NUzE=",
        )
        .unwrap();
        let value = decode_ecdsa_signature(&der).unwrap();
        assert!(verify_prehash(&public, &sha256(b"hello world"), &value));
        assert!(!verify_prehash(&public, &sha256(b"hello world!"), &value));
    }

    #[test]
    fn test_zero_scalars_fail() {
        let (_, public) = key_pair(KeyAlgorithm::P256);
        let value = EcdsaSignatureValue::new(BigUint::from(0u32), BigUint::from(1u32));
        assert!(!verify_prehash(&public, &sha256(b"x"), &value));
    }

    #[test]
    fn test_oversized_scalars_fail() {
        let (_, public) = key_pair(KeyAlgorithm::P256);
        let wide = BigUint::from_bytes_be(&[0xff; 40]);
        let value = EcdsaSignatureValue::new(wide.clone(), wide);
        assert!(!verify_prehash(&public, &sha256(b"x"), &value));
    }
}
