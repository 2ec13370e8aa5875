use thiserror::Error;

/// Errors raised by the crypto layer.
#[derive(Error, Debug)]
pub enum Error {
    /// The PEM armor around a key could not be decoded.
    #[error("Key format error: {0}")]
    KeyFormat(String),

    /// The key parsed (or failed to parse) as something other than a
    /// supported RSA or ECDSA public key.
    #[error("Key type error: {0}")]
    KeyType(String),

    /// Signature bytes are not a DER `SEQUENCE { r INTEGER, s INTEGER }`.
    #[error("Signature decode error: {0}")]
    SignatureDecode(String),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("PKCS8 error: {0}")]
    Pkcs8(#[from] pkcs8::Error),

    #[error("DER error: {0}")]
    Der(#[from] der::Error),

    #[error("Signing error: {0}")]
    Signing(String),

    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
