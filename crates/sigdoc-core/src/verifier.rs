//! Signature verification
//!
//! The cleartext is hashed with SHA-256 and the digest checked with the
//! scheme the key was classified as: RSA PKCS#1 v1.5 or ECDSA over the
//! key's curve. A signature that is merely wrong yields
//! [`VerificationOutcome::Rejected`]; an ECDSA signature that cannot be
//! decoded is an error.

use sigdoc_crypto::{
    asymmetric::{ecdsa, rsa},
    classify_public_key_pem, decode_ecdsa_signature, sha256, PublicKey,
};

use crate::{
    document::SignedDocument,
    error::{Error, Result},
    outcome::{Rejection, VerificationOutcome},
};

/// Verify `document` against `key`.
pub fn verify_document(key: &PublicKey, document: &SignedDocument) -> Result<VerificationOutcome> {
    let digest = sha256(document.cleartext().as_bytes());

    let matched = match key {
        PublicKey::Rsa(rsa_key) => {
            rsa::verify_pkcs1v15_sha256(rsa_key, &digest, document.signature())
        }
        PublicKey::Ecdsa(ec_key) => {
            let value = decode_ecdsa_signature(document.signature())?;
            ecdsa::verify_prehash(ec_key, &digest, &value)
        }
        _ => return Err(Error::UnsupportedKeyType),
    };

    if matched {
        tracing::debug!(algorithm = %key.algorithm_name(), "signature verified");
        Ok(VerificationOutcome::Verified)
    } else {
        let reason = Rejection::SignatureMismatch;
        tracing::info!(algorithm = %key.algorithm_name(), %reason, "signature rejected");
        Ok(VerificationOutcome::Rejected(reason))
    }
}

/// Classify `key_pem`, parse `document_json` and verify.
pub fn verify_pem_and_json(key_pem: &[u8], document_json: &[u8]) -> Result<VerificationOutcome> {
    let key = classify_public_key_pem(key_pem)?;
    let document = SignedDocument::from_json(document_json)?;
    verify_document(&key, &document)
}
