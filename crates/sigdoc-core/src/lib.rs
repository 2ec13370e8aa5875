//! Sigdoc Core
//!
//! Loads signed documents and verifies them against a classified public
//! key. The pipeline is:
//!
//! - [`classify_public_key_pem`] turns PEM bytes into a [`PublicKey`]
//! - [`SignedDocument::from_json`] parses the `{cleartext, signature}` record
//! - [`verify_document`] hashes the cleartext, dispatches on the key and
//!   returns a [`VerificationOutcome`]
//!
//! Structural problems are `Err(Error)`; a signature that simply does not
//! match is `Ok(VerificationOutcome::Rejected(..))`.

pub mod document;
pub mod error;
pub mod outcome;
pub mod verifier;

pub use document::SignedDocument;
pub use error::{Error, ErrorKind, Result};
pub use outcome::{Rejection, VerificationOutcome};
pub use sigdoc_crypto::{classify_public_key_pem, PrivateKey, PublicKey};
pub use verifier::{verify_document, verify_pem_and_json};
