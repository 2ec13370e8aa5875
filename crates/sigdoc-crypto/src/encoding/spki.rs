//! SPKI (Subject Public Key Info) parsing utilities
//!
//! This module turns a PEM-armored PKIX public key into a typed
//! [`PublicKey`]. The PEM armor is decoded first (failure is a key format
//! error); the DER is then parsed as SubjectPublicKeyInfo and classified
//! by its algorithm identifier (failure or an unsupported algorithm is a
//! key type error).

use const_oid::{
    db::{rfc5912, rfc8410},
    ObjectIdentifier,
};
use pkcs8::{
    der::Decode,
    spki::{AlgorithmIdentifierRef, SubjectPublicKeyInfoRef},
    DecodePublicKey,
};
use rsa::RsaPublicKey;

use crate::{
    error::{Error, Result},
    key::{EcCurve, EcdsaKey, PublicKey, RsaKey},
};

/// Algorithms a key's SPKI identifier can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpkiAlgorithm {
    Rsa,
    Ecdsa(EcCurve),
}

impl SpkiAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SpkiAlgorithm::Rsa => "RSA",
            SpkiAlgorithm::Ecdsa(EcCurve::P256) => "ECDSA P-256",
            SpkiAlgorithm::Ecdsa(EcCurve::P384) => "ECDSA P-384",
            SpkiAlgorithm::Ecdsa(EcCurve::P521) => "ECDSA P-521",
        }
    }
}

/// 从SPKI算法标识符解析算法类型
///
/// EC keys are told apart by the named-curve OID carried in the algorithm
/// parameters.
pub fn parse_algorithm_from_spki(algorithm: &AlgorithmIdentifierRef) -> Result<SpkiAlgorithm> {
    match algorithm.oid {
        rfc5912::RSA_ENCRYPTION => Ok(SpkiAlgorithm::Rsa),
        rfc5912::ID_EC_PUBLIC_KEY => {
            let curve = algorithm
                .parameters_oid()
                .map_err(|e| Error::KeyType(format!("EC key without named curve: {}", e)))?;
            Ok(SpkiAlgorithm::Ecdsa(curve_from_oid(curve)?))
        }
        rfc8410::ID_ED_25519 => Err(Error::KeyType("Ed25519 keys are not supported".to_string())),
        rfc8410::ID_X_25519 => Err(Error::KeyType("X25519 keys are not supported".to_string())),
        other => Err(Error::KeyType(format!("Unsupported algorithm OID: {}", other))),
    }
}

fn curve_from_oid(oid: ObjectIdentifier) -> Result<EcCurve> {
    match oid {
        rfc5912::SECP_256_R_1 => Ok(EcCurve::P256),
        rfc5912::SECP_384_R_1 => Ok(EcCurve::P384),
        rfc5912::SECP_521_R_1 => Ok(EcCurve::P521),
        other => Err(Error::KeyType(format!("Unsupported EC curve OID: {}", other))),
    }
}

/// Classify a PEM-armored PKIX public key.
///
/// Text before the first `-----BEGIN` line is ignored. The PEM label is not
/// checked; whatever the block holds must parse as SubjectPublicKeyInfo.
pub fn classify_public_key_pem(pem_bytes: &[u8]) -> Result<PublicKey> {
    let block = pem::parse(pem_bytes)
        .map_err(|e| Error::KeyFormat(format!("Invalid PEM armor: {}", e)))?;
    tracing::debug!(label = block.tag(), len = block.contents().len(), "decoded PEM block");
    classify_public_key_der(block.contents())
}

/// Classify a DER SubjectPublicKeyInfo.
pub fn classify_public_key_der(der: &[u8]) -> Result<PublicKey> {
    let spki = SubjectPublicKeyInfoRef::from_der(der)
        .map_err(|e| Error::KeyType(format!("Not a PKIX public key: {}", e)))?;
    let algorithm = parse_algorithm_from_spki(&spki.algorithm)?;

    let key: PublicKey = match algorithm {
        SpkiAlgorithm::Rsa => RsaKey::from(
            RsaPublicKey::from_public_key_der(der)
                .map_err(|e| Error::KeyType(format!("Failed to parse RSA public key: {}", e)))?,
        )
        .into(),
        SpkiAlgorithm::Ecdsa(EcCurve::P256) => EcdsaKey::from(
            p256::ecdsa::VerifyingKey::from_public_key_der(der)
                .map_err(|e| Error::KeyType(format!("Failed to parse P-256 public key: {}", e)))?,
        )
        .into(),
        SpkiAlgorithm::Ecdsa(EcCurve::P384) => EcdsaKey::from(
            p384::ecdsa::VerifyingKey::from_public_key_der(der)
                .map_err(|e| Error::KeyType(format!("Failed to parse P-384 public key: {}", e)))?,
        )
        .into(),
        SpkiAlgorithm::Ecdsa(EcCurve::P521) => EcdsaKey::from(
            p521::PublicKey::from_public_key_der(der)
                .map_err(|e| Error::KeyType(format!("Failed to parse P-521 public key: {}", e)))?,
        )
        .into(),
    };

    tracing::debug!(algorithm = algorithm.name(), "classified public key");
    Ok(key)
}
