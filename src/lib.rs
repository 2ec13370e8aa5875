//! # Sigdoc
//!
//! 签名文档验证
//!
//! ## 模块
//!
//! - `sigdoc_crypto` - 密钥分类、签名解码、RSA / ECDSA 原语
//! - `sigdoc_core` - 文档解析与验证
//! - `sigdoc-cli` - 命令行工具 (`sigdoc`)

// Re-export all sub-crates
pub use sigdoc_core;
pub use sigdoc_crypto;

pub use sigdoc_core::{
    verify_document, verify_pem_and_json, Error, ErrorKind, Rejection, Result, SignedDocument,
    VerificationOutcome,
};
pub use sigdoc_crypto::{classify_public_key_pem, PrivateKey, PublicKey};
