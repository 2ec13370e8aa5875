//! Signed document loading
//!
//! A document is a JSON object with exactly two string fields:
//!
//! ```json
//! {
//!   "cleartext": "hello world",
//!   "signature": "MEUCIQ..."
//! }
//! ```
//!
//! `signature` is standard padded base64, optionally wrapped across lines.
//! Field names are case-sensitive and any other field makes the document
//! invalid.

use serde::{Deserialize, Serialize};
use sigdoc_crypto::{hash::base64, PrivateKey};

use crate::error::Result;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentRecord {
    cleartext: String,
    signature: String,
}

#[derive(Serialize)]
struct DocumentRecordRef<'a> {
    cleartext: &'a str,
    signature: &'a str,
}

/// A parsed signed document.
///
/// `signature` is always the base64 decode of `signature_encoded`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedDocument {
    cleartext: String,
    signature_encoded: String,
    signature: Vec<u8>,
}

impl SignedDocument {
    /// Parse a document from JSON bytes.
    ///
    /// # Errors
    ///
    /// [`Error::DocumentFormat`](crate::Error::DocumentFormat) for malformed
    /// JSON, a missing, mistyped or unknown field;
    /// [`Error::SignatureEncoding`](crate::Error::SignatureEncoding) when the
    /// signature is not valid base64.
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let record: DocumentRecord = serde_json::from_slice(json)?;
        let signature = base64::decode(&record.signature)?;

        tracing::debug!(
            cleartext_len = record.cleartext.len(),
            signature_len = signature.len(),
            "parsed signed document"
        );

        Ok(Self {
            cleartext: record.cleartext,
            signature_encoded: record.signature,
            signature,
        })
    }

    /// Build a document from a cleartext and raw signature bytes.
    pub fn new(cleartext: impl Into<String>, signature: Vec<u8>) -> Self {
        Self {
            cleartext: cleartext.into(),
            signature_encoded: base64::encode(&signature),
            signature,
        }
    }

    /// Sign `cleartext` with `key` (SHA-256, then the key's scheme).
    pub fn sign(cleartext: impl Into<String>, key: &PrivateKey) -> Result<Self> {
        let cleartext = cleartext.into();
        let signature = key.sign(cleartext.as_bytes())?;
        tracing::debug!(algorithm = key.algorithm_name(), "signed document");
        Ok(Self::new(cleartext, signature))
    }

    /// Pretty-printed JSON with the `cleartext` and `signature` fields.
    pub fn to_json(&self) -> Result<String> {
        let record = DocumentRecordRef {
            cleartext: &self.cleartext,
            signature: &self.signature_encoded,
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    pub fn cleartext(&self) -> &str {
        &self.cleartext
    }

    pub fn signature_encoded(&self) -> &str {
        &self.signature_encoded
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(json: &str) -> ErrorKind {
        SignedDocument::from_json(json.as_bytes()).unwrap_err().kind()
    }

    #[test]
    fn test_parse_document() {
        let doc = SignedDocument::from_json(br#"{"cleartext":"hi","signature":"AQID"}"#).unwrap();
        assert_eq!(doc.cleartext(), "hi");
        assert_eq!(doc.signature_encoded(), "AQID");
        assert_eq!(doc.signature(), &[1, 2, 3]);
    }

    #[test]
    fn test_cleartext_is_verbatim() {
        let doc = SignedDocument::from_json(br#"{"cleartext":"  a\r\nb ","signature":""}"#).unwrap();
        assert_eq!(doc.cleartext(), "  a\r\nb ");
        assert!(doc.signature().is_empty());
    }

    #[test]
    fn test_structural_failures() {
        assert_eq!(kind_of("not json"), ErrorKind::DocumentFormat);
        assert_eq!(kind_of("[]"), ErrorKind::DocumentFormat);
        assert_eq!(kind_of(r#"{"cleartext":"hi"}"#), ErrorKind::DocumentFormat);
        assert_eq!(kind_of(r#"{"cleartext":1,"signature":"AQID"}"#), ErrorKind::DocumentFormat);
        assert_eq!(
            kind_of(r#"{"Cleartext":"hi","Signature":"AQID"}"#),
            ErrorKind::DocumentFormat
        );
        assert_eq!(
            kind_of(r#"{"cleartext":"hi","signature":"AQID","extra":true}"#),
            ErrorKind::DocumentFormat
        );
    }

    #[test]
    fn test_bad_base64_is_signature_encoding() {
        assert_eq!(
            kind_of(r#"{"cleartext":"hi","signature":"not base64!"}"#),
            ErrorKind::SignatureEncoding
        );
        assert_eq!(
            kind_of(r#"{"cleartext":"hi","signature":"AQI"}"#),
            ErrorKind::SignatureEncoding
        );
    }

    #[test]
    fn test_wrapped_signature_is_kept_verbatim() {
        let doc = SignedDocument::from_json(br#"{"cleartext":"hi","signature":"AQ\r\nID\n"}"#).unwrap();
        assert_eq!(doc.signature_encoded(), "AQ\r\nID\n");
        assert_eq!(doc.signature(), &[1, 2, 3]);
    }

    #[test]
    fn test_json_output_parses_back() {
        let doc = SignedDocument::new("hello world", vec![0x30, 0x00, 0xff]);
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"cleartext\": \"hello world\""));
        assert_eq!(SignedDocument::from_json(json.as_bytes()).unwrap(), doc);
    }
}
