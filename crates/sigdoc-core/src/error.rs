use thiserror::Error;

/// Structural failures while loading or verifying a document.
///
/// A signature that is well-formed but does not match is not an error; see
/// [`crate::VerificationOutcome::Rejected`].
#[derive(Error, Debug)]
pub enum Error {
    /// The public key's PEM armor could not be decoded.
    #[error("Key format error: {0}")]
    KeyFormat(String),

    /// The key is not a parseable RSA or ECDSA public key.
    #[error("Key type error: {0}")]
    KeyType(String),

    /// The document is not a JSON object with exactly `cleartext` and
    /// `signature` string fields.
    #[error("Document format error: {0}")]
    DocumentFormat(#[from] serde_json::Error),

    /// The `signature` field is not standard padded base64.
    #[error("Signature encoding error: {0}")]
    SignatureEncoding(#[from] base64::DecodeError),

    /// The signature bytes are not a valid ECDSA `(r, s)` structure.
    #[error("Signature decode error: {0}")]
    SignatureDecode(String),

    #[error("Unsupported key type")]
    UnsupportedKeyType,

    #[error("Crypto error: {0}")]
    Crypto(sigdoc_crypto::Error),
}

impl From<sigdoc_crypto::Error> for Error {
    fn from(value: sigdoc_crypto::Error) -> Self {
        use sigdoc_crypto::Error as CryptoError;

        match value {
            CryptoError::KeyFormat(msg) => Error::KeyFormat(msg),
            CryptoError::KeyType(msg) => Error::KeyType(msg),
            CryptoError::SignatureDecode(msg) => Error::SignatureDecode(msg),
            CryptoError::Base64(e) => Error::SignatureEncoding(e),
            other => Error::Crypto(other),
        }
    }
}

/// Fieldless view of [`Error`] for callers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyFormat,
    KeyType,
    DocumentFormat,
    SignatureEncoding,
    SignatureDecode,
    UnsupportedKeyType,
    Crypto,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::KeyFormat(_) => ErrorKind::KeyFormat,
            Error::KeyType(_) => ErrorKind::KeyType,
            Error::DocumentFormat(_) => ErrorKind::DocumentFormat,
            Error::SignatureEncoding(_) => ErrorKind::SignatureEncoding,
            Error::SignatureDecode(_) => ErrorKind::SignatureDecode,
            Error::UnsupportedKeyType => ErrorKind::UnsupportedKeyType,
            Error::Crypto(_) => ErrorKind::Crypto,
        }
    }
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
