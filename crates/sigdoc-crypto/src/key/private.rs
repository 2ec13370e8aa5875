use std::{fmt, str::FromStr};

use pkcs8::{
    pkcs5::pbes2, DecodePrivateKey, EncodePrivateKey, EncryptedPrivateKeyInfo, LineEnding,
    PrivateKeyInfo,
};
use rand::{rngs::OsRng, RngCore};
use rsa::RsaPrivateKey;

use super::{EcCurve, EcdsaKey, PublicKey, RsaKey};
use crate::{
    asymmetric::{ecdsa, rsa as rsa_scheme},
    encoding::spki::{parse_algorithm_from_spki, SpkiAlgorithm},
    error::{Error, Result},
    hash::sha256,
};

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PRIVATE_KEY_LABEL: &str = "ENCRYPTED PRIVATE KEY";

/// PBKDF2-SHA256 rounds used when writing encrypted private keys.
const PBKDF2_ITERATIONS: u32 = 100_000;

// ============================================================================
// Algorithm selection
// ============================================================================

/// Key types that can be generated for signing documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyAlgorithm {
    Rsa2048,
    Rsa3072,
    Rsa4096,
    P256,
    #[default]
    P384,
}

impl KeyAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa2048 => "rsa2048",
            KeyAlgorithm::Rsa3072 => "rsa3072",
            KeyAlgorithm::Rsa4096 => "rsa4096",
            KeyAlgorithm::P256 => "p256",
            KeyAlgorithm::P384 => "p384",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rsa2048" | "rsa" => Ok(KeyAlgorithm::Rsa2048),
            "rsa3072" => Ok(KeyAlgorithm::Rsa3072),
            "rsa4096" => Ok(KeyAlgorithm::Rsa4096),
            "p256" | "p-256" | "secp256r1" | "prime256v1" => Ok(KeyAlgorithm::P256),
            "p384" | "p-384" | "secp384r1" => Ok(KeyAlgorithm::P384),
            other => Err(Error::Other(format!("Unsupported key algorithm: {}", other))),
        }
    }
}

// ============================================================================
// Private keys
// ============================================================================

/// A private key able to sign documents.
pub enum PrivateKey {
    Rsa(RsaPrivateKey),
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&self.algorithm_name()).finish()
    }
}

impl PrivateKey {
    /// Generate a new key pair.
    pub fn generate(algorithm: KeyAlgorithm) -> Result<Self> {
        let key = match algorithm {
            KeyAlgorithm::Rsa2048 => PrivateKey::Rsa(rsa_scheme::generate(2048)?),
            KeyAlgorithm::Rsa3072 => PrivateKey::Rsa(rsa_scheme::generate(3072)?),
            KeyAlgorithm::Rsa4096 => PrivateKey::Rsa(rsa_scheme::generate(4096)?),
            KeyAlgorithm::P256 => PrivateKey::P256(p256::ecdsa::SigningKey::random(&mut OsRng)),
            KeyAlgorithm::P384 => PrivateKey::P384(p384::ecdsa::SigningKey::random(&mut OsRng)),
        };
        tracing::debug!(algorithm = %algorithm, "generated private key");
        Ok(key)
    }

    /// Import from PKCS8 DER, dispatching on the algorithm identifier.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        let info = PrivateKeyInfo::try_from(der)?;
        match parse_algorithm_from_spki(&info.algorithm)? {
            SpkiAlgorithm::Rsa => Ok(PrivateKey::Rsa(RsaPrivateKey::from_pkcs8_der(der)?)),
            SpkiAlgorithm::Ecdsa(EcCurve::P256) => {
                Ok(PrivateKey::P256(p256::ecdsa::SigningKey::from_pkcs8_der(der)?))
            }
            SpkiAlgorithm::Ecdsa(EcCurve::P384) => {
                Ok(PrivateKey::P384(p384::ecdsa::SigningKey::from_pkcs8_der(der)?))
            }
            // verify-only curve
            SpkiAlgorithm::Ecdsa(EcCurve::P521) => Err(Error::KeyType(
                "P-521 private keys are not supported for signing".to_string(),
            )),
        }
    }

    /// Import from PEM.
    ///
    /// Accepts `PRIVATE KEY` and `ENCRYPTED PRIVATE KEY` blocks; the latter
    /// needs `passphrase`.
    pub fn from_pem(pem_text: &str, passphrase: Option<&str>) -> Result<Self> {
        let block =
            pem::parse(pem_text).map_err(|e| Error::KeyFormat(format!("Invalid PEM: {}", e)))?;

        match (block.tag(), passphrase) {
            (PRIVATE_KEY_LABEL, _) => Self::from_pkcs8_der(block.contents()),
            (ENCRYPTED_PRIVATE_KEY_LABEL, Some(passphrase)) => {
                let encrypted = EncryptedPrivateKeyInfo::try_from(block.contents())?;
                let document = encrypted.decrypt(passphrase)?;
                Self::from_pkcs8_der(document.as_bytes())
            }
            (ENCRYPTED_PRIVATE_KEY_LABEL, None) => Err(Error::KeyFormat(
                "private key is encrypted; a passphrase is required".to_string(),
            )),
            (other, _) => Err(Error::KeyFormat(format!(
                "Unexpected PEM label: {}",
                other
            ))),
        }
    }

    /// Export to PKCS8 DER.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>> {
        let document = match self {
            PrivateKey::Rsa(key) => key.to_pkcs8_der()?,
            PrivateKey::P256(key) => key.to_pkcs8_der()?,
            PrivateKey::P384(key) => key.to_pkcs8_der()?,
        };
        Ok(document.as_bytes().to_vec())
    }

    /// Export to PKCS8 PEM.
    pub fn to_pkcs8_pem(&self) -> Result<String> {
        let pem = match self {
            PrivateKey::Rsa(key) => key.to_pkcs8_pem(LineEnding::LF)?,
            PrivateKey::P256(key) => key.to_pkcs8_pem(LineEnding::LF)?,
            PrivateKey::P384(key) => key.to_pkcs8_pem(LineEnding::LF)?,
        };
        Ok(pem.to_string())
    }

    /// Export to passphrase-protected PKCS8 PEM (PBES2, PBKDF2-SHA256,
    /// AES-256-CBC).
    pub fn to_pkcs8_encrypted_pem(&self, passphrase: &str) -> Result<String> {
        let mut salt = [0u8; 16];
        let mut iv = [0u8; 16];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut iv);

        let params = pbes2::Parameters::pbkdf2_sha256_aes256cbc(PBKDF2_ITERATIONS, &salt, &iv)
            .map_err(|e| Error::Other(format!("PBES2 parameters: {}", e)))?;

        let plain = self.to_pkcs8_der()?;
        let encrypted = PrivateKeyInfo::try_from(plain.as_slice())?
            .encrypt_with_params(params, passphrase)?;
        let pem = encrypted.to_pem(ENCRYPTED_PRIVATE_KEY_LABEL, LineEnding::LF)?;
        Ok(pem.to_string())
    }

    pub fn algorithm_name(&self) -> &'static str {
        match self {
            PrivateKey::Rsa(_) => "RSA",
            PrivateKey::P256(_) => "ECDSA P-256",
            PrivateKey::P384(_) => "ECDSA P-384",
        }
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Rsa(key) => RsaKey::from(key.to_public_key()).into(),
            PrivateKey::P256(key) => EcdsaKey::from(*key.verifying_key()).into(),
            PrivateKey::P384(key) => EcdsaKey::from(*key.verifying_key()).into(),
        }
    }

    /// Sign a SHA-256 digest.
    ///
    /// RSA produces a PKCS#1 v1.5 signature, ECDSA a DER `(r, s)` sequence.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<Vec<u8>> {
        match self {
            PrivateKey::Rsa(key) => rsa_scheme::sign_pkcs1v15_sha256(key, digest),
            PrivateKey::P256(key) => ecdsa::sign_prehash_p256(key, digest),
            PrivateKey::P384(key) => ecdsa::sign_prehash_p384(key, digest),
        }
    }

    /// Hash `message` with SHA-256 and sign the digest.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.sign_digest(&sha256(message))
    }
}
