//! Typed key material
//!
//! A [`PublicKey`] is produced once by the classifier in
//! [`crate::encoding::spki`] and never changes afterwards. Verification
//! dispatches on its variant.

mod private;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use pkcs8::{EncodePublicKey, LineEnding};
use rsa::{traits::PublicKeyParts, BigUint, RsaPublicKey};

use crate::{
    error::{Error, Result},
    hash::sha256_hex,
};

pub use private::{KeyAlgorithm, PrivateKey};

// ============================================================================
// Curves
// ============================================================================

/// Named curves accepted for ECDSA keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EcCurve {
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1), verification only
    P521,
}

impl EcCurve {
    pub fn name(&self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
        }
    }

    pub fn field_bits(&self) -> usize {
        match self {
            EcCurve::P256 => 256,
            EcCurve::P384 => 384,
            EcCurve::P521 => 521,
        }
    }

    /// Size in bytes of a scalar (and of each of `r` and `s`).
    pub fn scalar_size(&self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P384 => 48,
            EcCurve::P521 => 66,
        }
    }
}

// ============================================================================
// Public keys
// ============================================================================

/// A classified public key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublicKey {
    Rsa(RsaKey),
    Ecdsa(EcdsaKey),
}

impl PublicKey {
    /// Short algorithm label, e.g. `RSA` or `ECDSA P-384`.
    pub fn algorithm_name(&self) -> String {
        match self {
            PublicKey::Rsa(_) => "RSA".to_string(),
            PublicKey::Ecdsa(key) => format!("ECDSA {}", key.curve().name()),
        }
    }

    pub fn key_size_bits(&self) -> usize {
        match self {
            PublicKey::Rsa(key) => key.size_bits(),
            PublicKey::Ecdsa(key) => key.curve().field_bits(),
        }
    }

    /// Export as DER SubjectPublicKeyInfo.
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        let document = match self {
            PublicKey::Rsa(key) => key.inner.to_public_key_der(),
            PublicKey::Ecdsa(key) => match &key.inner {
                CurveKey::P256(vk) => vk.to_public_key_der(),
                CurveKey::P384(vk) => vk.to_public_key_der(),
                CurveKey::P521(pk) => pk.to_public_key_der(),
            },
        }
        .map_err(|e| Error::Other(format!("SPKI encoding failed: {}", e)))?;
        Ok(document.as_bytes().to_vec())
    }

    /// Export as `-----BEGIN PUBLIC KEY-----` PEM.
    pub fn to_pem(&self) -> Result<String> {
        let pem = match self {
            PublicKey::Rsa(key) => key.inner.to_public_key_pem(LineEnding::LF),
            PublicKey::Ecdsa(key) => match &key.inner {
                CurveKey::P256(vk) => vk.to_public_key_pem(LineEnding::LF),
                CurveKey::P384(vk) => vk.to_public_key_pem(LineEnding::LF),
                CurveKey::P521(pk) => pk.to_public_key_pem(LineEnding::LF),
            },
        }
        .map_err(|e| Error::Other(format!("SPKI PEM encoding failed: {}", e)))?;
        Ok(pem)
    }

    /// Hex SHA-256 over the SPKI DER encoding.
    pub fn fingerprint_sha256(&self) -> Result<String> {
        Ok(sha256_hex(&self.to_spki_der()?))
    }
}

impl From<RsaKey> for PublicKey {
    fn from(value: RsaKey) -> Self {
        PublicKey::Rsa(value)
    }
}

impl From<EcdsaKey> for PublicKey {
    fn from(value: EcdsaKey) -> Self {
        PublicKey::Ecdsa(value)
    }
}

/// RSA public key: modulus and public exponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKey {
    inner: RsaPublicKey,
}

impl From<RsaPublicKey> for RsaKey {
    fn from(value: RsaPublicKey) -> Self {
        Self { inner: value }
    }
}

impl RsaKey {
    pub fn modulus(&self) -> &BigUint {
        self.inner.n()
    }

    pub fn exponent(&self) -> &BigUint {
        self.inner.e()
    }

    /// Modulus length in bits
    pub fn size_bits(&self) -> usize {
        self.inner.size() * 8
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.inner
    }
}

/// ECDSA public key: a curve and a point on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaKey {
    inner: CurveKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CurveKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    // verifier is built from the point on each use
    P521(p521::PublicKey),
}

impl From<p256::ecdsa::VerifyingKey> for EcdsaKey {
    fn from(value: p256::ecdsa::VerifyingKey) -> Self {
        Self {
            inner: CurveKey::P256(value),
        }
    }
}

impl From<p384::ecdsa::VerifyingKey> for EcdsaKey {
    fn from(value: p384::ecdsa::VerifyingKey) -> Self {
        Self {
            inner: CurveKey::P384(value),
        }
    }
}

impl From<p521::PublicKey> for EcdsaKey {
    fn from(value: p521::PublicKey) -> Self {
        Self {
            inner: CurveKey::P521(value),
        }
    }
}

impl EcdsaKey {
    pub fn curve(&self) -> EcCurve {
        match self.inner {
            CurveKey::P256(_) => EcCurve::P256,
            CurveKey::P384(_) => EcCurve::P384,
            CurveKey::P521(_) => EcCurve::P521,
        }
    }

    /// SEC1 uncompressed point (`0x04 || x || y`).
    pub fn point(&self) -> Vec<u8> {
        match &self.inner {
            CurveKey::P256(vk) => vk.to_encoded_point(false).as_bytes().to_vec(),
            CurveKey::P384(vk) => vk.to_encoded_point(false).as_bytes().to_vec(),
            CurveKey::P521(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
        }
    }

    pub(crate) fn curve_key(&self) -> &CurveKey {
        &self.inner
    }
}
